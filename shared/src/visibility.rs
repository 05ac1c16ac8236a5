/// Whether a password input shows its characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Revealed,
}

impl PasswordVisibility {
    pub fn toggle(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Revealed,
            PasswordVisibility::Revealed => PasswordVisibility::Masked,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == PasswordVisibility::Revealed
    }

    /// Value for the `type` attribute of the input element.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Revealed => "text",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "Mostrar senha",
            PasswordVisibility::Revealed => "Ocultar senha",
        }
    }
}
