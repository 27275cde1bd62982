use scrollseq_core::FrameReport;

/// Payload of one `scrollseq:triggered` event, lifted out of a frame so the
/// event can be dispatched once the section state is no longer borrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggeredNotice {
    pub progress: f32,
    pub effect: bool,
}

pub fn triggered_notice(report: &FrameReport) -> Option<TriggeredNotice> {
    report.triggered.map(|t| TriggeredNotice {
        progress: t.progress,
        effect: report.effect_started,
    })
}
