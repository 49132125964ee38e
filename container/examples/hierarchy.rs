use std::sync::Arc;

use wirebox::Container;

// Application-wide configuration, shared by every request.
struct AppConfig {
  name: &'static str,
}

// A value that only makes sense for a single request.
struct RequestId(u64);

fn handle_request(scope: &Container) -> String {
  let config = scope.resolve::<AppConfig>().expect("app config missing");
  let request = scope.resolve::<RequestId>().expect("request id missing");
  format!("[{}] handling request {}", config.name, request.0)
}

fn main() {
  // The application-scoped container holds long-lived services.
  let app = Arc::new(Container::new());
  app.bind(AppConfig { name: "wirebox-demo" });

  // Each request gets its own child container that falls back to the
  // application scope for anything it does not hold itself.
  for id in 1..=3 {
    let request_scope = Container::new();
    request_scope.set_parent(&app);
    request_scope.bind(RequestId(id));

    println!("{}", handle_request(&request_scope));
  }

  // Request-scoped values never leak into the application scope.
  assert!(app.get::<RequestId>().is_none());
  println!("Application scope never saw a request id.");
}
