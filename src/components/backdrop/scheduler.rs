//! Frame scheduling and the pause state machine.
//!
//! [`MotionController`] owns the running/paused flag and drives a
//! [`FrameScheduler`], which abstracts over `requestAnimationFrame` so the
//! pause protocol can be exercised against a fake in tests. The loop never
//! self-resumes: leaving `Paused` is the only thing that re-arms it.

/// Schedules repeated animation frames.
pub trait FrameScheduler {
	/// Requests the next frame.
	fn start(&mut self);
	/// Cancels any pending frame request.
	fn stop(&mut self);
	/// Whether a frame request is currently pending.
	fn is_running(&self) -> bool;
}

/// Animation state of the backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
	Running,
	Paused,
}

/// Owns the paused flag and keeps the scheduler in step with it.
#[derive(Clone, Copy, Debug)]
pub struct MotionController {
	motion: Motion,
}

impl MotionController {
	/// Starts paused when the host reports a reduced-motion preference.
	pub fn new(reduced_motion: bool) -> Self {
		Self {
			motion: if reduced_motion {
				Motion::Paused
			} else {
				Motion::Running
			},
		}
	}

	pub fn is_paused(&self) -> bool {
		self.motion == Motion::Paused
	}

	/// Kicks off the loop at startup. Does nothing while paused, so a
	/// reduced-motion page stays on its blank first frame until toggled.
	pub fn arm(&self, scheduler: &mut impl FrameScheduler) {
		if self.motion == Motion::Running {
			scheduler.start();
		}
	}

	/// Flips the state unconditionally and returns the new value.
	///
	/// Entering `Running` re-arms the scheduler; entering `Paused` cancels
	/// the pending frame.
	pub fn toggle(&mut self, scheduler: &mut impl FrameScheduler) -> Motion {
		self.motion = match self.motion {
			Motion::Running => {
				scheduler.stop();
				Motion::Paused
			}
			Motion::Paused => {
				scheduler.start();
				Motion::Running
			}
		};
		self.motion
	}
}
