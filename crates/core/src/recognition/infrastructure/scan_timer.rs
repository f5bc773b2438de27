use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};

use crate::recognition::domain::recognition_session::ScanTicket;

/// Granularity at which a sleeping timer notices cancellation.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Cancellable one-shot timer that hands a [`ScanTicket`] back after a delay.
///
/// The wait runs on a background thread; the owner polls with
/// [`ScanTimer::poll`] from its event loop. Cancelling (explicitly or by
/// dropping the timer) guarantees the ticket is never delivered.
pub struct ScanTimer {
    ticket: ScanTicket,
    rx: Receiver<ScanTicket>,
    cancelled: Arc<AtomicBool>,
}

impl ScanTimer {
    pub fn spawn(delay: Duration, ticket: ScanTicket) -> Self {
        let (tx, rx) = crossbeam_channel::bounded::<ScanTicket>(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_clone = cancelled.clone();

        thread::spawn(move || {
            let deadline = Instant::now() + delay;
            loop {
                if cancelled_clone.load(Ordering::Relaxed) {
                    return;
                }
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::sleep((deadline - now).min(CANCEL_POLL_INTERVAL));
            }
            if !cancelled_clone.load(Ordering::Relaxed) {
                let _ = tx.send(ticket);
            }
        });

        Self {
            ticket,
            rx,
            cancelled,
        }
    }

    pub fn ticket(&self) -> ScanTicket {
        self.ticket
    }

    /// Returns the ticket once the delay has elapsed, `None` while waiting or
    /// after cancellation.
    pub fn poll(&self) -> Option<ScanTicket> {
        if self.is_cancelled() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(ticket) => Some(ticket),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for ScanTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::domain::camera_slot::test_support::CountingCamera;
    use crate::detection::infrastructure::random_detector::RandomDetector;
    use crate::recognition::domain::recognition_session::RecognitionSession;

    fn ticket() -> ScanTicket {
        let camera = CountingCamera::new();
        let mut session =
            RecognitionSession::new(Arc::new(camera), Box::new(RandomDetector::seeded(1)));
        session.start().unwrap()
    }

    fn wait_for(timer: &ScanTimer, limit: Duration) -> Option<ScanTicket> {
        let deadline = Instant::now() + limit;
        while Instant::now() < deadline {
            if let Some(t) = timer.poll() {
                return Some(t);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_delivers_ticket_after_delay() {
        let t = ticket();
        let timer = ScanTimer::spawn(Duration::from_millis(30), t);
        assert_eq!(wait_for(&timer, Duration::from_secs(2)), Some(t));
    }

    #[test]
    fn test_nothing_before_delay() {
        let timer = ScanTimer::spawn(Duration::from_secs(5), ticket());
        assert!(timer.poll().is_none());
    }

    #[test]
    fn test_delivers_exactly_once() {
        let t = ticket();
        let timer = ScanTimer::spawn(Duration::from_millis(10), t);
        assert_eq!(wait_for(&timer, Duration::from_secs(2)), Some(t));
        assert!(wait_for(&timer, Duration::from_millis(100)).is_none());
    }

    #[test]
    fn test_cancel_before_delay_suppresses_ticket() {
        let timer = ScanTimer::spawn(Duration::from_millis(50), ticket());
        timer.cancel();
        assert!(timer.is_cancelled());
        assert!(wait_for(&timer, Duration::from_millis(200)).is_none());
    }

    #[test]
    fn test_cancel_after_delivery_hides_ticket() {
        let timer = ScanTimer::spawn(Duration::ZERO, ticket());
        thread::sleep(Duration::from_millis(50));
        timer.cancel();
        assert!(timer.poll().is_none());
    }

    #[test]
    fn test_drop_sets_cancel_flag() {
        let timer = ScanTimer::spawn(Duration::from_secs(5), ticket());
        let flag = timer.cancelled.clone();
        drop(timer);
        assert!(flag.load(Ordering::Relaxed));
    }
}
