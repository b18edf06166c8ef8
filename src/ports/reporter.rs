/// Tag shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Info,
    Warn,
    Error,
    Progress,
}

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Info => "[INFO]",
            Status::Warn => "[WARN]",
            Status::Error => "[ERROR]",
            Status::Progress => "[...]",
        }
    }
}

/// Sink for user-visible status lines.
pub trait Reporter {
    fn line(&self, status: Status, message: &str);

    /// Free-form text such as banners.
    fn raw(&self, text: &str);

    fn ok(&self, message: &str) {
        self.line(Status::Ok, message);
    }

    fn info(&self, message: &str) {
        self.line(Status::Info, message);
    }

    fn warn(&self, message: &str) {
        self.line(Status::Warn, message);
    }

    fn error(&self, message: &str) {
        self.line(Status::Error, message);
    }

    fn progress(&self, message: &str) {
        self.line(Status::Progress, message);
    }
}
