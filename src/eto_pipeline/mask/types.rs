/// Mask samples above this value are land.
pub const LAND_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Land,
    Water,
}

impl Surface {
    pub fn from_mask_sample(sample: u8) -> Self {
        if sample > LAND_THRESHOLD {
            Surface::Land
        } else {
            Surface::Water
        }
    }
}
