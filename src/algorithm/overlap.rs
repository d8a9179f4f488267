use crate::bbox::BoundingBox;
use crate::error::Result;

/// `true` if the two boxes share at least one point; touching edges count.
///
/// # Examples
///
/// ```
/// use geoturf::algorithm::overlap;
/// use geoturf::bbox::BoundingBox;
///
/// let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
/// let b = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
/// assert!(overlap(&a, &b));
/// ```
pub fn overlap(first: &BoundingBox, second: &BoundingBox) -> bool {
    first.overlaps(second)
}

/// [`overlap`] for boxes given as loose `[west, south, east, north]` slices.
///
/// Fails unless both slices hold exactly four values.
pub fn overlap_bounds(first: &[f64], second: &[f64]) -> Result<bool> {
    let first = BoundingBox::try_from(first)?;
    let second = BoundingBox::try_from(second)?;
    Ok(first.overlaps(&second))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoTurfError;

    #[test]
    fn vertically_separated() {
        let b1 = [
            -0.2197265625,
            19.31114335506464,
            13.447265624999998,
            28.304380682962783,
        ];
        let b2 = [
            3.4716796874999996,
            32.24997445586331,
            8.876953125,
            35.88905007936091,
        ];
        assert!(!overlap_bounds(&b1, &b2).unwrap());
        assert!(!overlap_bounds(&b2, &b1).unwrap());
        assert!(!overlap(&b1.into(), &b2.into()));
    }

    #[test]
    fn malformed_bounds() {
        let good = [0.0, 0.0, 1.0, 1.0];
        assert!(matches!(
            overlap_bounds(&good, &[0.0, 0.0, 1.0]),
            Err(GeoTurfError::InvalidBox(_))
        ));
        assert!(matches!(
            overlap_bounds(&[0.0, 0.0, 1.0, 1.0, 2.0], &good),
            Err(GeoTurfError::InvalidBox(_))
        ));
        assert!(matches!(
            overlap_bounds(&[], &good),
            Err(GeoTurfError::NilInput(_))
        ));
    }
}
