// Generated code must not rely on names in scope at the derive site
#![no_implicit_prelude]

#[derive(::std::fmt::Debug, ::assert_that::Assertions)]
struct Settings {
    retries: u8,
    verbose: bool,
    label: ::std::string::String,
}

fn main() {
    let settings = Settings {
        retries: 3,
        verbose: false,
        label: <::std::string::String as ::std::convert::From<&str>>::from("default"),
    };

    SettingsAssert::assert_that(&settings)
        .has_retries(3)
        .is_not_verbose()
        .has_label("default");
}
