use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "simd")] {
        mod simd;
        pub(crate) use simd::ng_round;
    } else {
        mod soft;
        pub(crate) use soft::ng_round;
    }
}
