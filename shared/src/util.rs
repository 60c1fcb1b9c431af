use rand::Rng;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate the display number printed on the order ticket, e.g. `#4821`.
///
/// Four random digits in 1000..=9999. Collisions are possible and harmless:
/// the number is only read out to the customer, never used as a key.
pub fn order_number() -> String {
    order_number_with(&mut rand::thread_rng())
}

/// Same as [`order_number`] with a caller-supplied RNG
pub fn order_number_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{}", rng.gen_range(1000..=9999))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_order_number_shape() {
        for _ in 0..500 {
            let id = order_number();
            assert_eq!(id.len(), 5, "{id}");
            let digits = id.strip_prefix('#').unwrap();
            let n: u32 = digits.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = order_number_with(&mut StdRng::seed_from_u64(42));
        let b = order_number_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01
        assert!(now_millis() > 1_704_067_200_000);
    }
}
