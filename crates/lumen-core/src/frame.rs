//! Cancellable frame loop.
//!
//! Replaces a self-rescheduling "next frame" callback with an explicit loop
//! that runs until its [`CancelToken`] fires. Each frame runs to completion
//! before the next one starts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Shared flag that stops a [`FrameLoop`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Calling it more than once is harmless.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fixed-rate frame driver.
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    interval: Duration,
}

impl FrameLoop {
    /// A loop targeting `fps` frames per second. Zero is treated as one.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `frame` until `token` is cancelled or `frame` fails.
    ///
    /// The token is checked before every frame, so cancelling from inside
    /// `frame` stops the loop before the next one.
    pub fn run<E>(
        &self,
        token: &CancelToken,
        mut frame: impl FnMut() -> Result<(), E>,
    ) -> Result<(), E> {
        while !token.is_cancelled() {
            let started = Instant::now();
            frame()?;
            if token.is_cancelled() {
                break;
            }
            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        Ok(())
    }

    /// Run exactly `count` frames back to back, without sleeping.
    pub fn step<E>(&self, count: usize, mut frame: impl FnMut() -> Result<(), E>) -> Result<(), E> {
        for _ in 0..count {
            frame()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_runs_exact_number_of_frames() {
        let mut frames = 0;
        FrameLoop::new(60)
            .step(7, || {
                frames += 1;
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(frames, 7);
    }

    #[test]
    fn run_stops_when_cancelled_from_frame() {
        let token = CancelToken::new();
        let inner = token.clone();
        let mut frames = 0;
        FrameLoop::new(1000)
            .run(&token, || {
                frames += 1;
                if frames == 3 {
                    inner.cancel();
                }
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(frames, 3);
        assert!(token.is_cancelled());
    }

    #[test]
    fn run_never_enters_a_cancelled_loop() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        let mut frames = 0;
        FrameLoop::new(60)
            .run(&token, || {
                frames += 1;
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(frames, 0);
    }

    #[test]
    fn run_propagates_frame_errors() {
        let token = CancelToken::new();
        let result = FrameLoop::new(1000).run(&token, || Err("surface lost"));
        assert_eq!(result, Err("surface lost"));
    }

    #[test]
    fn zero_fps_is_one_frame_per_second() {
        assert_eq!(FrameLoop::new(0).interval(), Duration::from_secs(1));
    }
}
