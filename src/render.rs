use crate::bucket;
use crate::interval::Interval;
use crate::number;




/// Default delimiter placed between the two bounds of a rendered interval.
pub const DEFAULT_DELIMITER: &str = "–";




/**
 * Label text interpolated into rendered intervals and select options. The
 * view layer owns localization; whatever text it looks up is passed in
 * here. The `Default` labels are plain English.
 */
#[derive(Clone, Copy, Debug)]
pub struct Labels<'a> {
    pub from: &'a str,
    pub till: &'a str,
    pub less_than: &'a str,
    pub more_than: &'a str,
}

impl Default for Labels<'_> {
    fn default() -> Self {
        Self {
            from: "from",
            till: "till",
            less_than: "less than",
            more_than: "more than",
        }
    }
}




/**
 * Render an interval as a human-readable label: empty when both bounds are
 * zero, `"till 20"` or `"from 10"` when one-sided, a single number when the
 * bounds agree, and `"10–20"` otherwise.
 */
pub fn stringify(interval: &Interval, delimiter: &str, labels: &Labels) -> String {
    match (interval.from, interval.till) {
        (0, 0) => String::new(),
        (0, till) => format!("{} {}", labels.till, till),
        (from, 0) => format!("{} {}", labels.from, from),
        (from, till) if from == till => from.to_string(),
        (from, till) => format!("{}{}{}", from, delimiter, till),
    }
}




/**
 * Build one `(label, descriptor)` pair per configured bucket, suitable for
 * a search select. Open-ended descriptors render as `"less than N"` or
 * `"more than N"`; the descriptor itself is echoed verbatim as the option
 * value.
 */
pub fn bucket_options(buckets: &[String], labels: &Labels) -> Vec<(String, String)> {
    buckets
        .iter()
        .map(|descriptor| (option_text(descriptor, labels), descriptor.clone()))
        .collect()
}


fn option_text(descriptor: &str, labels: &Labels) -> String {
    let (low, high) = bucket::split(descriptor);

    if !number::round_trips(Some(low)) {
        format!("{} {}", labels.less_than, high.unwrap_or(""))
    } else if !number::round_trips(high) {
        format!("{} {}", labels.more_than, low)
    } else {
        format!("{}{}{}", low, DEFAULT_DELIMITER, high.unwrap_or(""))
    }
}
