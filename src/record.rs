use crate::bucket::Bucket;
use crate::interval::Interval;
use crate::number;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;




/**
 * A from/till pair exactly as submitted by a form: either side may be
 * absent, blank, or non-numeric text. Raw intervals are never persisted in
 * this shape; they are normalized on every save.
 */
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawInterval {
    pub from: Option<String>,
    pub till: Option<String>,
}




// ============================================================================
impl RawInterval {

    pub fn new(from: Option<&str>, till: Option<&str>) -> Self {
        Self {
            from: from.map(String::from),
            till: till.map(String::from),
        }
    }


    /// Whether the submission carries no value at all: both sides absent or
    /// whitespace-only.
    pub fn is_blank(&self) -> bool {
        fn blank(side: &Option<String>) -> bool {
            side.as_ref().map_or(true, |text| text.trim().is_empty())
        }
        blank(&self.from) && blank(&self.till)
    }


    /// Normalize both sides to integers.
    pub fn interval(&self) -> Interval {
        Interval {
            from: number::normalize(self.from.as_deref()),
            till: number::normalize(self.till.as_deref()),
        }
    }
}




/**
 * The denormalized record persisted in place of a raw submission: the
 * normalized bounds plus one overlap flag per configured bucket, keyed by
 * the bucket's verbatim descriptor string. The descriptor text is part of
 * the persisted contract (queries address flags by it), and the map is
 * ordered so that assembling the same submission twice serializes to
 * byte-identical output.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub from: i64,
    pub till: i64,
    pub ranges: BTreeMap<String, bool>,
}




/**
 * Assemble the record for one submission against the configured bucket
 * list. A blank submission yields no record at all rather than an all-false
 * one, so untouched form fields stay out of storage. An empty bucket list
 * yields an empty flag map.
 */
pub fn denormalize(raw: &RawInterval, buckets: &[String]) -> Option<RangeRecord> {
    if raw.is_blank() {
        return None;
    }

    let interval = raw.interval();
    let ranges = buckets
        .iter()
        .map(|descriptor| {
            let bucket = Bucket::parse(descriptor);
            (descriptor.clone(), interval.overlaps(&bucket))
        })
        .collect();

    Some(RangeRecord {
        from: interval.from,
        till: interval.till,
        ranges,
    })
}




/**
 * Assemble records for a batch of submissions in parallel. Each element is
 * an independent pure computation, so the work maps straight onto rayon's
 * parallel iterator.
 */
pub fn denormalize_all(raws: &[RawInterval], buckets: &[String]) -> Vec<Option<RangeRecord>> {
    debug!(
        "denormalizing {} submissions against {} buckets",
        raws.len(),
        buckets.len()
    );
    raws.par_iter().map(|raw| denormalize(raw, buckets)).collect()
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{denormalize, denormalize_all, RawInterval};

    fn buckets() -> Vec<String> {
        vec!["300-600".into(), "601-900".into(), "901-1500".into()]
    }

    #[test]
    fn record_carries_one_flag_per_bucket() {
        let raw = RawInterval::new(Some("500"), Some("1000"));
        let record = denormalize(&raw, &buckets()).unwrap();

        assert_eq!(record.from, 500);
        assert_eq!(record.till, 1000);
        assert_eq!(record.ranges.len(), 3);
        assert_eq!(record.ranges["300-600"], true);
        assert_eq!(record.ranges["601-900"], true);
        assert_eq!(record.ranges["901-1500"], false);
    }

    #[test]
    fn blank_submission_yields_no_record() {
        assert!(denormalize(&RawInterval::default(), &buckets()).is_none());
        assert!(denormalize(&RawInterval::new(Some(""), Some("   ")), &buckets()).is_none());
        assert!(denormalize(&RawInterval::new(None, Some("")), &buckets()).is_none());
    }

    #[test]
    fn explicit_zero_is_not_blank() {
        let record = denormalize(&RawInterval::new(Some("0"), None), &buckets()).unwrap();
        assert_eq!(record.from, 0);
        assert_eq!(record.till, 0);
    }

    #[test]
    fn one_sided_submission_normalizes_the_missing_side_to_zero() {
        let record = denormalize(&RawInterval::new(None, Some("450")), &buckets()).unwrap();
        assert_eq!(record.from, 0);
        assert_eq!(record.till, 450);
        assert_eq!(record.ranges["300-600"], true);
        assert_eq!(record.ranges["901-1500"], false);
    }

    #[test]
    fn open_ended_bucket_catches_large_intervals() {
        let buckets = vec!["901-".to_string()];
        let record = denormalize(&RawInterval::new(Some("500"), Some("1000")), &buckets).unwrap();
        assert_eq!(record.ranges["901-"], true);
    }

    #[test]
    fn empty_bucket_list_yields_an_empty_flag_map() {
        let record = denormalize(&RawInterval::new(Some("1"), Some("2")), &[]).unwrap();
        assert!(record.ranges.is_empty());
    }

    #[test]
    fn assembly_is_idempotent_to_the_byte() {
        let raw = RawInterval::new(Some("500"), Some("1000"));
        let a = denormalize(&raw, &buckets()).unwrap();
        let b = denormalize(&raw, &buckets()).unwrap();

        let mut bytes_a = Vec::new();
        let mut bytes_b = Vec::new();
        ciborium::ser::into_writer(&a, &mut bytes_a).unwrap();
        ciborium::ser::into_writer(&b, &mut bytes_b).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }

    #[test]
    fn batch_assembly_matches_the_serial_path() {
        let raws = vec![
            RawInterval::new(Some("500"), Some("1000")),
            RawInterval::default(),
            RawInterval::new(None, Some("450")),
        ];
        let serial: Vec<_> = raws.iter().map(|raw| denormalize(raw, &buckets())).collect();
        assert_eq!(denormalize_all(&raws, &buckets()), serial);
    }
}
