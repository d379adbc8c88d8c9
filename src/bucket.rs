use crate::number;




/// Sentinel maximum standing in for an open high bound (32-bit signed
/// integer max).
pub const MAX_BOUND: i64 = 2_147_483_647;




/// Characters accepted as the separator between the low and high sides of a
/// bucket descriptor.
pub const DELIMITERS: [char; 3] = ['-', ':', '\\'];




/**
 * A reference interval against which submitted intervals are tested for
 * overlap. Buckets are configured externally as textual descriptors
 * (`"300-600"`, `"-600"`, `"901-"`) and parsed to closed integer bounds on
 * every classification pass; nothing is cached between calls.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub low: i64,
    pub high: i64,
}




// ============================================================================
impl Bucket {

    /**
     * Parse a bucket descriptor into its bounds. The descriptor splits at
     * the first delimiter occurrence. A blank or non-numeric high side means
     * the bucket is unbounded above and receives the sentinel maximum. A
     * blank low side becomes zero, indistinguishable from an explicit `"0"`;
     * there is no unbounded sentinel for the low side.
     */
    pub fn parse(descriptor: &str) -> Self {
        let (low, high) = split(descriptor);

        Self {
            low: number::normalize(Some(low)),
            high: if number::round_trips(high) {
                number::normalize(high)
            } else {
                MAX_BOUND
            },
        }
    }
}




/**
 * Split a descriptor at the first delimiter occurrence into its low and
 * high sides. A descriptor without any delimiter is all low side.
 */
pub fn split(descriptor: &str) -> (&str, Option<&str>) {
    match descriptor.find(&DELIMITERS[..]) {
        Some(at) => (&descriptor[..at], Some(&descriptor[at + 1..])),
        None => (descriptor, None),
    }
}
