use std::sync::Arc;

use wirebox::{resolve, Container};

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    // ... logic to generate report ...
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  let container = Container::new();

  // --- Registration ---

  // Register the concrete ConsoleLogger as the implementation for the
  // `dyn Logger` trait. The container stores it as Arc<dyn Logger>.
  container.bind_as::<dyn Logger>(Arc::new(ConsoleLogger));

  // Register the ReportService through a provider whose own dependency (the
  // logger) is resolved by the container. This is the "inversion of control":
  // ReportService doesn't create its logger.
  container.provide(|logger: Arc<dyn Logger>| ReportService { logger });

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = resolve!(container, ReportService);

  println!("Using the service...");
  report_service.generate_report();

  // The output shows messages from the ConsoleLogger, proving the dependency
  // was injected.
}
