use crate::{
    field::dot_field::DotField,
    field::random::DotSource,
    foundation::error::{SirdsError, SirdsResult},
    shift::region::ShiftRegion,
};

/// Shift magnitude used when none is configured, in cells.
pub const DEFAULT_SHIFT: usize = 2;

/// Encode a horizontal disparity over `region` of `field`, in place.
///
/// Each visited cell `(y, x)` is copied into the `shift` cells to its left, after which the
/// `shift` columns ending at `x` are redrawn from `dots`. Columns are visited left to right; a
/// visit to `x` only writes columns `<= x`, so every read sees the pre-shift value.
///
/// Cells of `region` outside the field are skipped, as are copy and refill targets left of
/// column 0. Only the region and the `shift` columns to its left can change.
pub fn apply_shift<S: DotSource + ?Sized>(
    field: &mut DotField,
    region: ShiftRegion,
    shift: usize,
    dots: &mut S,
) -> SirdsResult<()> {
    if shift == 0 {
        return Err(SirdsError::validation("shift magnitude must be > 0"));
    }

    let Some((rows, cols)) = region.clip(field.size()) else {
        tracing::trace!(?region, "shift region lies outside the field");
        return Ok(());
    };

    for y in rows {
        let row = field.row_mut(y);
        for x in cols.clone() {
            let dot = row[x];

            let first = x.saturating_sub(shift);
            row[first..x].fill(dot);

            for cell in &mut row[(x + 1).saturating_sub(shift)..=x] {
                *cell = dots.next_dot();
            }
        }
    }
    Ok(())
}

/// [`apply_shift`] over several regions in order.
pub fn apply_shifts<S: DotSource + ?Sized>(
    field: &mut DotField,
    regions: &[ShiftRegion],
    shift: usize,
    dots: &mut S,
) -> SirdsResult<()> {
    for region in regions {
        apply_shift(field, *region, shift, dots)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/shift/disparity.rs"]
mod tests;
