/// Where the current recognition session stands. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognitionStatus {
    #[default]
    Idle,
    Scanning,
    Recognized,
    Failed,
}

impl RecognitionStatus {
    pub const ALL: &[RecognitionStatus] = &[
        RecognitionStatus::Idle,
        RecognitionStatus::Scanning,
        RecognitionStatus::Recognized,
        RecognitionStatus::Failed,
    ];

    /// Whether this status may carry detected faces.
    pub fn carries_faces(self) -> bool {
        self == RecognitionStatus::Recognized
    }

    /// Whether the last scan has produced an outcome, success or not.
    pub fn is_resolved(self) -> bool {
        matches!(self, RecognitionStatus::Recognized | RecognitionStatus::Failed)
    }
}

impl std::fmt::Display for RecognitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionStatus::Idle => write!(f, "Idle"),
            RecognitionStatus::Scanning => write!(f, "Scanning"),
            RecognitionStatus::Recognized => write!(f, "Recognition Complete"),
            RecognitionStatus::Failed => write!(f, "Recognition Failed"),
        }
    }
}
