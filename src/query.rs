use serde::Serialize;




/**
 * A flag-equality filter for the query-building collaborator: stored
 * records match when the boolean at `path` equals `value`. The path
 * addresses a flag written by record assembly, so the equality test is
 * exactly as meaningful as the stored classification.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub path: String,
    pub value: bool,
}




/**
 * Build the filter selecting records whose stored interval overlaps the
 * given bucket. The flag for a descriptor lives at
 * `<field>.ranges.<descriptor>`.
 */
pub fn ranged(field: &str, descriptor: &str) -> Filter {
    Filter {
        path: format!("{}.ranges.{}", field, descriptor),
        value: true,
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::ranged;

    #[test]
    fn filter_addresses_the_stored_flag() {
        let filter = ranged("price", "300-600");
        assert_eq!(filter.path, "price.ranges.300-600");
        assert!(filter.value);
    }
}
