//! Proptest generators for property-based testing.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use hashcash::MintRequest;
use hashcash_core::StampFormat;

/// Denominations cheap enough to mint thousands of times in a test run.
pub const CHEAP_DENOMINATIONS: std::ops::RangeInclusive<u32> = 1..=10;

/// Generate a StampFormat.
pub fn stamp_format() -> impl Strategy<Value = StampFormat> {
    prop_oneof![Just(StampFormat::Version0), Just(StampFormat::Version1)]
}

/// Generate a cheap denomination.
pub fn denomination() -> impl Strategy<Value = u32> {
    CHEAP_DENOMINATIONS
}

/// Generate a resource: non-empty, ASCII, no `:`.
pub fn resource() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.@/_-]{1,120}".prop_map(String::from)
}

/// Generate a date between 1970 and 2099.
pub fn date() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
}

/// Parameters for one mint.
#[derive(Debug, Clone)]
pub struct MintParams {
    pub resource: String,
    pub denomination: u32,
    pub date: DateTime<Utc>,
    pub format: StampFormat,
}

impl MintParams {
    /// Turn the parameters into a fully specified request.
    pub fn request(&self) -> MintRequest {
        MintRequest::new(self.resource.clone())
            .denomination(self.denomination)
            .date(self.date)
            .format(self.format)
    }
}

impl Arbitrary for MintParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (resource(), denomination(), date(), stamp_format())
            .prop_map(|(resource, denomination, date, format)| MintParams {
                resource,
                denomination,
                date,
                format,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;
    use hashcash_core::{
        build_prefix, padded_length, stamp_denomination, CounterDigits, HASH_BLOCK_LEN,
    };

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_minted_stamp_meets_denomination(params: MintParams) {
            let stamp = TestFixture::with_seed(1).mint(&params);

            prop_assert!(stamp.denomination() >= params.denomination);
            prop_assert_eq!(stamp_denomination(stamp.as_str().as_bytes()), stamp.denomination());
            prop_assert_eq!(stamp.as_str().len() % HASH_BLOCK_LEN, 0);
        }

        #[test]
        fn test_minted_stamp_layout(params: MintParams) {
            let stamp = TestFixture::with_seed(2).mint(&params);
            let text = stamp.as_str();
            let prefix = build_prefix(&params.resource, params.denomination, &params.date, params.format);

            prop_assert!(text.as_bytes().starts_with(&prefix));
            let fields: Vec<&str> = text.split(':').collect();
            prop_assert_eq!(fields.len(), params.format.field_count());
            prop_assert_eq!(fields[0], params.format.to_string());
            if params.format == StampFormat::Version1 {
                let denomination = params.denomination.to_string();
                prop_assert_eq!(fields[1], denomination.as_str());
                prop_assert_eq!(fields[4], "");
            }
        }

        #[test]
        fn test_stamp_length_is_padded_prefix(params: MintParams) {
            let stamp = TestFixture::with_seed(3).mint(&params);
            let prefix = build_prefix(&params.resource, params.denomination, &params.date, params.format);

            prop_assert_eq!(stamp.as_str().len(), padded_length(prefix.len(), 16));
            prop_assert!(stamp.as_str().len() >= prefix.len() + 16);
        }

        #[test]
        fn test_counter_digit_count(value in any::<u64>()) {
            let digits = CounterDigits::encode(value);
            let mut expected = 0;
            let mut rest = value;
            while rest != 0 {
                rest /= 65;
                expected += 1;
            }
            prop_assert_eq!(digits.len(), expected);
        }

        #[test]
        fn test_padded_length_block_aligned(prefix_len in 0usize..4096, random in 13usize..256) {
            let total = padded_length(prefix_len, random);
            prop_assert_eq!(total % HASH_BLOCK_LEN, 0);
            prop_assert!(total >= prefix_len + random);
            prop_assert!(total - (prefix_len + random) < HASH_BLOCK_LEN);
        }
    }
}
