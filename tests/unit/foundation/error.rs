use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SirdsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SirdsError::encode("x").to_string().contains("encode error:"));
    assert!(
        SirdsError::display("x")
            .to_string()
            .contains("display error:")
    );
}

#[test]
fn out_of_range_names_the_cell_and_field() {
    let err = SirdsError::OutOfRange {
        row: 7,
        col: 3,
        height: 6,
        width: 4,
    };
    assert!(err.is_out_of_range());
    let msg = err.to_string();
    assert!(msg.contains("(7, 3)"));
    assert!(msg.contains("6x4"));
    assert!(!SirdsError::validation("x").is_out_of_range());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SirdsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
