use std::fmt;

/// Collections owned by the application database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Babies,
    Images,
    Music,
    Chats,
    Letters,
    Diaries,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Babies => "babies",
            Collection::Images => "images",
            Collection::Music => "music",
            Collection::Chats => "chats",
            Collection::Letters => "letters",
            Collection::Diaries => "diaries",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
