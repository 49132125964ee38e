use std::sync::Arc;

use wirebox::{Container, Injectable};

trait Mailer: Send + Sync {
  fn send(&self, to: &str, body: &str);
}

struct SmtpMailer {
  host: String,
}
impl Mailer for SmtpMailer {
  fn send(&self, to: &str, body: &str) {
    println!("[{}] -> {}: {}", self.host, to, body);
  }
}

struct Templates {
  welcome: &'static str,
}

// Only fields marked #[inject] participate; `sent` is plain state.
#[derive(Injectable)]
struct SignupFlow {
  #[inject]
  mailer: Arc<dyn Mailer>,
  #[inject]
  templates: Arc<Templates>,
  sent: usize,
}

impl SignupFlow {
  fn signup(&mut self, email: &str) {
    self.mailer.send(email, self.templates.welcome);
    self.sent += 1;
  }
}

fn main() {
  let container = Container::new();

  container.bind(Templates {
    welcome: "Welcome aboard!",
  });
  container.bind_as::<dyn Mailer>(Arc::new(SmtpMailer {
    host: "smtp.example.com".to_string(),
  }));

  // Start from a blank record and let the container fill the marked fields.
  let mut flow = SignupFlow {
    mailer: Arc::new(SmtpMailer {
      host: String::new(),
    }),
    templates: Arc::new(Templates { welcome: "" }),
    sent: 0,
  };
  container.apply(&mut flow).expect("dependencies missing");

  flow.signup("ada@example.com");
  flow.signup("grace@example.com");

  println!("Sent {} welcome mails.", flow.sent);
}
