use crate::error::VisError;
use rand::Rng;

/// Number of parking spots in the lot.
pub const PARKING_SPOTS: usize = 10;
pub const MIN_CAR_SIZE: u8 = 1;
pub const MAX_CAR_SIZE: u8 = 5;

/// Car sizes currently parked in the lot, one per spot.
///
/// Always exactly [`PARKING_SPOTS`] values, each within
/// `MIN_CAR_SIZE..=MAX_CAR_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSizes([u8; PARKING_SPOTS]);

impl CarSizes {
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut sizes = [MIN_CAR_SIZE; PARKING_SPOTS];
        for size in &mut sizes {
            *size = rng.gen_range(MIN_CAR_SIZE..=MAX_CAR_SIZE);
        }
        Self(sizes)
    }

    /// Build from arbitrary values, rejecting a wrong length or out-of-range sizes.
    pub fn from_slice(values: &[u8]) -> Result<Self, VisError> {
        let sizes: [u8; PARKING_SPOTS] = values.try_into().map_err(|_| {
            VisError::new("invalid-car-count")
                .with_arg("expected", PARKING_SPOTS)
                .with_arg("got", values.len())
        })?;

        if let Some((spot, size)) = sizes
            .iter()
            .enumerate()
            .find(|(_, s)| !(MIN_CAR_SIZE..=MAX_CAR_SIZE).contains(*s))
        {
            return Err(VisError::new("invalid-car-size")
                .with_arg("spot", spot)
                .with_arg("size", size));
        }

        Ok(Self(sizes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}
