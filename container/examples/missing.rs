use std::panic;

use wirebox::{resolve, Container};

struct UnregisteredService;

fn main() {
  let container = Container::new();

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(container, UnregisteredService);
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the non-panicking `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match container.get::<UnregisteredService>() {
    Some(_) => panic!("Should not have found the service!"),
    None => println!("Correctly received `None` for the missing service."),
  }
}
