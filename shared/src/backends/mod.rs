pub mod loopback;

cfg_if! {
    if #[cfg(feature = "wbindgen")] {
        pub mod wbindgen;
    } else {}
}
