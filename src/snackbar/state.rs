// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle state machine.
//!
//! The machine has three externally observable states: idle (nothing
//! rendered), showing requested (a message was accepted and waits for the
//! next tick), and visible (the surface is rendered, fading in or out).
//! Every transition runs on the tick handler, so a tick subscription must be
//! active whenever the machine is not idle; [`State::subscription`] takes
//! care of that.
//!
//! Timers are deadlines evaluated against the tick's `Instant` rather than
//! scheduled callbacks. Superseding a message simply replaces the deadline,
//! which is what makes the cancellation guarantee trivial: a stale deadline
//! no longer exists once a new `show` has been processed.

use super::content::Content;
use super::widget;
use iced::time::{self, Duration, Instant};
use iced::{Element, Subscription};

/// Duration of the fade-in animation when a message appears.
pub const FADE_IN: Duration = Duration::from_millis(200);

/// Duration of the fade-out animation on auto-dismiss.
pub const FADE_OUT: Duration = Duration::from_millis(200);

/// Duration of the accelerated fade-out used when a new message supersedes
/// one that is still on screen.
pub const FADE_OUT_FAST: Duration = Duration::from_millis(50);

/// Animation tick interval (~60 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Internal widget messages. Map these into the host's message type.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Animation clock tick.
    Tick(Instant),
    /// The action button was pressed.
    ActionPressed,
}

/// Events propagated to the owning application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<M> {
    None,
    /// The action button was pressed; dispatch this host message.
    Action(M),
}

/// Animation phase of the snackbar surface.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Nothing rendered, no deadlines pending.
    Idle,
    /// Opacity ramping 0 -> 1. The dismiss deadline is already fixed so the
    /// message stays fully visible for its whole configured duration.
    FadingIn { since: Instant, dismiss_at: Instant },
    /// Fully visible, waiting for the dismiss deadline.
    Visible { dismiss_at: Instant },
    /// Opacity ramping `from` -> 0 over `duration`.
    FadingOut {
        since: Instant,
        duration: Duration,
        from: f32,
    },
}

/// Snackbar widget state.
///
/// `M` is the host application's message type, dispatched when the action
/// button is pressed. The owning application holds this struct, calls
/// [`show`](State::show) to trigger messages, routes [`Message`] values into
/// [`update`](State::update), and renders [`view`](State::view) on top of its
/// main content.
#[derive(Debug)]
pub struct State<M> {
    /// The active request. Replaced wholesale on each `show` call; at most
    /// one message is ever pending or visible.
    content: Option<Content<M>>,
    /// A request was accepted and awaits the transition to visible.
    showing: bool,
    phase: Phase,
    /// Opacity as of the last processed tick.
    opacity: f32,
    /// Optional identifier attached to the rendered root for UI tests.
    test_id: Option<String>,
}

impl<M> Default for State<M> {
    fn default() -> Self {
        Self {
            content: None,
            showing: false,
            phase: Phase::Idle,
            opacity: 0.0,
            test_id: None,
        }
    }
}

impl<M> State<M> {
    /// Creates an idle snackbar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an identifier to the rendered root container so automated
    /// UI tests can locate the snackbar.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Accepts a new message for display.
    ///
    /// Never blocks and never fails. The previous message (if any) is
    /// superseded: its content is replaced and its dismiss deadline is
    /// discarded. If the previous message is still on screen it flashes out
    /// quickly before the new one fades in.
    pub fn show(&mut self, content: Content<M>) {
        log::debug!("snackbar: show {:?}", content.text());
        self.content = Some(content);
        self.showing = true;
    }

    /// Advances the state machine to `now`.
    ///
    /// Normally driven by [`Message::Tick`] through [`update`](State::update);
    /// exposed so the lifecycle can be exercised with a simulated clock.
    pub fn step(&mut self, now: Instant) {
        // Resolve animation completions and the dismiss deadline first, so a
        // fade-out that just finished can hand over to a pending request
        // within the same tick.
        match self.phase {
            Phase::Idle => {}
            Phase::FadingIn { since, dismiss_at } => {
                if now.duration_since(since) >= FADE_IN {
                    self.phase = Phase::Visible { dismiss_at };
                }
            }
            Phase::Visible { dismiss_at } => {
                if now >= dismiss_at {
                    log::debug!("snackbar: auto-dismiss");
                    self.phase = Phase::FadingOut {
                        since: now,
                        duration: FADE_OUT,
                        from: 1.0,
                    };
                }
            }
            Phase::FadingOut { since, duration, .. } => {
                if now.duration_since(since) >= duration {
                    self.phase = Phase::Idle;
                }
            }
        }

        // A pending request starts the fade-in from hidden, or flashes the
        // still-visible surface out quickly so the new message can take over
        // on a later tick.
        if self.showing {
            match self.phase {
                Phase::Idle => match &self.content {
                    Some(content) => {
                        let dismiss_at = now + content.timer_value().as_duration() + FADE_IN;
                        self.phase = Phase::FadingIn {
                            since: now,
                            dismiss_at,
                        };
                        self.showing = false;
                    }
                    None => {
                        // `show` always stores content; tolerate the flag
                        // being set without one instead of rendering stale
                        // state forever.
                        self.showing = false;
                    }
                },
                Phase::FadingIn { .. } | Phase::Visible { .. } => {
                    self.phase = Phase::FadingOut {
                        since: now,
                        duration: FADE_OUT_FAST,
                        from: self.opacity,
                    };
                }
                Phase::FadingOut { .. } => {
                    // Let the running fade-out finish; the flag stays set and
                    // re-triggers on the tick that lands in `Idle`.
                }
            }
        }

        self.opacity = self.opacity_at(now);
    }

    /// Handles a widget message, returning the event to propagate.
    pub fn update(&mut self, message: Message) -> Event<M>
    where
        M: Clone,
    {
        match message {
            Message::Tick(now) => {
                self.step(now);
                Event::None
            }
            Message::ActionPressed => {
                // Pressing the action never alters visibility; dismissal
                // stays on its own clock.
                match self.content.as_ref().and_then(Content::on_press_action) {
                    Some(action) => Event::Action(action.clone()),
                    None => Event::None,
                }
            }
        }
    }

    /// The animation tick subscription.
    ///
    /// Active only while the machine is not idle, so an idle snackbar costs
    /// nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_idle() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    /// Renders the snackbar overlay.
    ///
    /// Returns a zero-size element while hidden so no layout space is
    /// reserved. `viewport_width` caps the surface width to the window minus
    /// the side margins.
    pub fn view(&self, viewport_width: f32) -> Element<'_, Message> {
        widget::view(self, viewport_width)
    }

    /// Returns true when nothing is rendered and no request is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle && !self.showing
    }

    /// Returns true while the surface is rendered (including fades).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Returns the opacity as of the last processed tick.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the active message, if any.
    #[must_use]
    pub fn content(&self) -> Option<&Content<M>> {
        self.content.as_ref()
    }

    /// Returns the test identifier, if one was configured.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::FadingIn { since, .. } => ramp(now, since, FADE_IN),
            Phase::Visible { .. } => 1.0,
            Phase::FadingOut {
                since,
                duration,
                from,
            } => from * (1.0 - ramp(now, since, duration)),
        }
    }
}

/// Linear 0..=1 ramp of `duration` starting at `since`.
fn ramp(now: Instant, since: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    if elapsed >= duration {
        1.0
    } else {
        elapsed.as_secs_f32() / duration.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::super::content::Timer;
    use super::*;

    type TestState = State<u32>;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Drives `state` tick by tick from `start`, returning the first offset
    /// (in 10 ms steps) at which `predicate` holds, panicking after `limit`.
    fn run_until(
        state: &mut TestState,
        start: Instant,
        limit: Duration,
        predicate: impl Fn(&TestState) -> bool,
    ) -> Duration {
        let step = ms(10);
        let mut elapsed = Duration::ZERO;
        while elapsed <= limit {
            state.step(start + elapsed);
            if predicate(state) {
                return elapsed;
            }
            elapsed += step;
        }
        panic!("predicate not satisfied within {limit:?}");
    }

    #[test]
    fn new_state_is_idle() {
        let state = TestState::new();
        assert!(state.is_idle());
        assert!(!state.is_visible());
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn show_leaves_idle_on_next_tick() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("hello"));
        assert!(!state.is_idle(), "a pending request is not idle");
        assert!(!state.is_visible(), "not rendered before the tick");

        state.step(t0);
        assert!(state.is_visible());
    }

    #[test]
    fn fade_in_completes_after_200ms() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("hello"));
        state.step(t0);
        assert!(state.opacity() < 1.0);

        state.step(t0 + ms(100));
        assert!(state.opacity() > 0.0 && state.opacity() < 1.0);

        state.step(t0 + ms(200));
        assert_eq!(state.opacity(), 1.0);
    }

    #[test]
    fn visible_duration_covers_configured_timer() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("hello").timer(Timer::Short));
        state.step(t0);

        // Fully visible once the fade-in is done, and still fully visible
        // 1500 ms later: the deadline is fade-in start + timer + fade-in.
        state.step(t0 + ms(200));
        assert_eq!(state.opacity(), 1.0);
        state.step(t0 + ms(200) + ms(1500) - ms(10));
        assert_eq!(state.opacity(), 1.0);

        // Past the deadline the fade-out begins.
        state.step(t0 + ms(1710));
        state.step(t0 + ms(1730));
        assert!(state.opacity() < 1.0);
    }

    #[test]
    fn returns_to_idle_within_fade_out() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("hello"));
        state.step(t0);

        let hidden_at = run_until(&mut state, t0, ms(2500), TestState::is_idle);
        // timer 1500 + fade-in 200 + fade-out 200, plus one tick of slack
        assert!(hidden_at >= ms(1900));
        assert!(hidden_at <= ms(1900) + ms(20));
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn superseding_show_discards_previous_deadline() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("A"));
        state.step(t0);
        state.step(t0 + ms(200));
        assert_eq!(state.opacity(), 1.0);

        // Supersede well before A's deadline (t0 + 1700).
        state.show(Content::new("B").timer(Timer::Long));
        state.step(t0 + ms(300));
        state.step(t0 + ms(325));
        assert!(state.is_visible());
        assert!(state.opacity() < 1.0, "fast fade-out started");

        // The fast fade lasts 50 ms, then B fades in.
        state.step(t0 + ms(350));
        state.step(t0 + ms(360));
        assert_eq!(state.content().map(Content::text), Some("B"));

        // A's deadline passing must not dismiss B: at t0 + 1700 B is still
        // mid-cycle (its own deadline is ~t0 + 350 + 3200).
        state.step(t0 + ms(1700));
        assert_eq!(state.opacity(), 1.0);

        // B dismisses on its own schedule.
        let hidden_at = run_until(&mut state, t0 + ms(360), ms(4000), TestState::is_idle);
        assert!(hidden_at >= ms(3000));
    }

    #[test]
    fn rapid_reshow_flashes_out_then_in() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("first"));
        state.step(t0);
        state.step(t0 + ms(200));

        state.show(Content::new("second"));
        state.step(t0 + ms(210));
        state.step(t0 + ms(235));
        let mid_flash = state.opacity();
        assert!(mid_flash < 1.0);

        // 50 ms after the flash started it is done and the fade-in restarts
        // from zero.
        state.step(t0 + ms(260));
        assert_eq!(state.opacity(), 0.0);
        state.step(t0 + ms(460));
        assert_eq!(state.opacity(), 1.0);
        assert_eq!(state.content().map(Content::text), Some("second"));
    }

    #[test]
    fn show_during_fade_out_waits_for_completion() {
        let mut state = TestState::new();
        let t0 = Instant::now();

        state.show(Content::new("first"));
        state.step(t0);
        state.step(t0 + ms(200));

        // Let the cycle reach the dismiss fade-out.
        state.step(t0 + ms(1710));
        state.step(t0 + ms(1730));
        assert!(state.is_visible());
        assert!(state.opacity() < 1.0);

        state.show(Content::new("second"));
        state.step(t0 + ms(1740));
        // Still fading the old surface out.
        assert!(state.is_visible());

        // After the fade-out ends, the pending request re-triggers.
        state.step(t0 + ms(1910));
        state.step(t0 + ms(2110));
        assert_eq!(state.opacity(), 1.0);
        assert_eq!(state.content().map(Content::text), Some("second"));
    }

    #[test]
    fn action_press_dispatches_host_message() {
        let mut state = TestState::new();
        state.show(Content::new("Saved").action("Undo", 7));
        state.step(Instant::now());

        assert_eq!(state.update(Message::ActionPressed), Event::Action(7));
        // One event per press, visibility untouched.
        assert!(state.is_visible());
        assert_eq!(state.update(Message::ActionPressed), Event::Action(7));
    }

    #[test]
    fn action_press_without_message_is_noop() {
        let mut state = TestState::new();
        state.show(Content::new("Done").action_label("Ok"));
        state.step(Instant::now());

        assert_eq!(state.update(Message::ActionPressed), Event::None);
        assert!(state.is_visible());
    }

    #[test]
    fn idle_flag_gates_the_tick_subscription() {
        let mut state = TestState::new();
        assert!(state.is_idle());

        state.show(Content::new("hello"));
        assert!(!state.is_idle(), "pending request keeps the clock running");

        let t0 = Instant::now();
        run_until(&mut state, t0, ms(2500), TestState::is_idle);
        assert!(state.is_idle());
    }
}
