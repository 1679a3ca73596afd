/// A username/password pair authorizing access to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: &str, password: &str) -> Self {
        Credential {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        self.password == password
    }
}
