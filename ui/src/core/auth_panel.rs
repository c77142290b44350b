//! State model for the landing page's authentication panel.
//!
//! The view keeps one `Signal<AuthPanelState>` and calls these methods from
//! its event handlers; everything that decides what gets rendered lives here
//! so it can be tested without a DOM.

/// Which of the two mutually exclusive forms is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    SignUp,
    SignIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPanelState {
    pub sign_up_active: bool,
    pub remember_me_active: bool,
}

impl Default for AuthPanelState {
    fn default() -> Self {
        Self {
            sign_up_active: true,
            remember_me_active: false,
        }
    }
}

impl AuthPanelState {
    /// State with the sign-in form showing.
    pub fn sign_in() -> Self {
        Self {
            sign_up_active: false,
            ..Self::default()
        }
    }

    pub fn form(&self) -> AuthForm {
        if self.sign_up_active {
            AuthForm::SignUp
        } else {
            AuthForm::SignIn
        }
    }

    /// Shared by the toggle button and the inline switch link.
    pub fn toggle_form(&mut self) {
        self.sign_up_active = !self.sign_up_active;
    }

    pub fn toggle_remember_me(&mut self) {
        self.remember_me_active = !self.remember_me_active;
    }

    /// Label of the toggle button: names the form it switches *to*.
    pub fn toggle_label_key(&self) -> &'static str {
        match self.form() {
            AuthForm::SignUp => "sign-in",
            AuthForm::SignIn => "sign-up",
        }
    }

    /// Label of the inline link inside the current form.
    pub fn switch_link_key(&self) -> &'static str {
        match self.form() {
            AuthForm::SignUp => "sign-in-to-your-account",
            AuthForm::SignIn => "create-an-account",
        }
    }

    pub fn submit_label_key(&self) -> &'static str {
        match self.form() {
            AuthForm::SignUp => "sign-up",
            AuthForm::SignIn => "sign-in",
        }
    }
}
