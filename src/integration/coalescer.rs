use tokio::sync::mpsc;

/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to draw this loop. Any number of queued requests collapses into one frame;
    /// the very first loop always draws so the screen is never blank.
    #[inline]
    pub fn decide_render(
        queued_render_reqs: usize,
        saw_frame_event: bool,
        first_frame: bool,
    ) -> bool {
        first_frame || queued_render_reqs > 0 || saw_frame_event
    }

    /// Only the last of several resizes matters
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }

    /// Empty the render request channel and report how many requests were waiting
    pub fn drain_requests(rx: &mut mpsc::Receiver<()>) -> usize {
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}
