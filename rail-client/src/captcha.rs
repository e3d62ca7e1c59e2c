use rand::Rng;

const CAPTCHA_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptchaKind {
    Login,
    Signup,
}

pub fn generate_captcha(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CAPTCHA_CHARSET[rng.gen_range(0..CAPTCHA_CHARSET.len())] as char)
        .collect()
}

/// One live challenge per form. A challenge is replaced after every failed submission.
#[derive(Debug, Clone)]
pub struct CaptchaBoard {
    length: usize,
    login: String,
    signup: String,
}

impl CaptchaBoard {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            login: generate_captcha(length),
            signup: generate_captcha(length),
        }
    }

    pub fn current(&self, kind: CaptchaKind) -> &str {
        match kind {
            CaptchaKind::Login => &self.login,
            CaptchaKind::Signup => &self.signup,
        }
    }

    pub fn refresh(&mut self, kind: CaptchaKind) -> &str {
        let fresh = generate_captcha(self.length);
        let slot = match kind {
            CaptchaKind::Login => &mut self.login,
            CaptchaKind::Signup => &mut self.signup,
        };
        *slot = fresh;
        slot
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, kind: CaptchaKind, answer: &str) -> bool {
        self.current(kind) == answer
    }
}

impl Default for CaptchaBoard {
    fn default() -> Self {
        Self::new(6)
    }
}
