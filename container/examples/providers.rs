use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wirebox::Container;

// A "database pool" that is expensive to construct.
struct DbPool {
  url: String,
}

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let container = Container::new();

  // Bind the configuration value the pool needs.
  container.bind(String::from("postgres://localhost/app"));

  // Register a lazy provider. Nothing runs yet.
  container.provide(|url: Arc<String>| {
    CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    println!("Constructing the pool (expensive)...");
    DbPool {
      url: (*url).clone(),
    }
  });

  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 0);
  println!("Provider registered; the pool has not been constructed.");

  // First demand invokes the producer and caches the result.
  let pool = container.resolve::<DbPool>().unwrap();
  println!("Resolved pool for {}", pool.url);

  // Every later resolution returns the cached instance.
  let again = container.resolve::<DbPool>().unwrap();
  assert!(Arc::ptr_eq(&pool, &again));
  assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
  println!("The producer ran exactly once.");
}
