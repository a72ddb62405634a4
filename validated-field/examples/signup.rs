//! Drives a small sign-up form through change and submit events.
//!
//! Run with `cargo run --example signup`.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use validated_field::prelude::*;

fn main() -> Result<(), ConfigError> {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let username = Field::with_config(FieldConfig::new().trim_on_submit().required());
    username.try_add_validators([
        rules::required("required", "Username is required"),
        rules::min_length("min_length", 3, "Username must be at least 3 characters"),
        rules::pattern("charset", r"^[a-z0-9_]+$", "Only lowercase letters, digits and _")?,
    ])?;

    let email = Field::new();
    email.try_add_validators([
        rules::required("required", "Email is required"),
        rules::email("email", "Please enter a valid email"),
    ])?;

    email.watch(|state| println!("  email    -> {}", state));

    for input in ["A", "ad", "ada"] {
        username.handle_change(input);
        println!("  username -> {}", username.snapshot());
    }
    email.handle_change("ada@");
    email.handle_change("ada@example.com");

    let fields = [&username, &email];
    for field in fields {
        field.handle_submit();
    }

    if fields.iter().all(|f| f.is_valid()) {
        println!("form is valid");
    } else {
        for field in fields {
            if let Some(message) = field.first_error_message() {
                println!("{}: {}", field.id(), message);
            }
        }
    }

    // the server rejects the name after submit
    username.set_error("Username is taken");
    println!("  username -> {}", username.snapshot());

    Ok(())
}
