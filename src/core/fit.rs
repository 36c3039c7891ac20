use crate::models::{Vehicle, StorageSpace};

/// Check whether a vehicle physically fits in a storage space
///
/// Each of the space's length, width and height must be at least the
/// vehicle's. The vehicle is never rotated, so a long narrow vehicle does not
/// fit a short wide space. A missing dimension on either side never fits.
#[inline]
pub fn can_fit(vehicle: &Vehicle, space: &StorageSpace) -> bool {
    match (vehicle.dimensions(), space.dimensions()) {
        (Some(inner), Some(outer)) => inner.fits_within(&outer),
        _ => false,
    }
}
