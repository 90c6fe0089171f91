// Cancel-before-reschedule frame loop.
//
// A [`FrameLoop`] holds at most one pending [`AnimationHandle`]. Scheduling
// always cancels the previous request first, so two callbacks can never be
// queued for the same loop.

/// Opaque id of a scheduled frame callback (a `requestAnimationFrame` id in
/// the browser).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(i32);

impl AnimationHandle {
    #[inline]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn id(self) -> i32 {
        self.0
    }
}

/// Host mechanism that invokes the frame callback on the next display frame.
pub trait FrameScheduler {
    /// Queue the frame callback. `None` means the host refused (e.g. no window).
    fn request_frame(&mut self) -> Option<AnimationHandle>;
    fn cancel_frame(&mut self, handle: AnimationHandle);
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<AnimationHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pending(&self) -> Option<AnimationHandle> {
        self.pending
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel whatever is pending and request a fresh frame.
    pub fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.cancel(scheduler);
        self.pending = scheduler.request_frame();
        self.pending.is_some()
    }

    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// The pending callback is running; its handle is spent.
    #[inline]
    pub fn mark_fired(&mut self) {
        self.pending = None;
    }
}
