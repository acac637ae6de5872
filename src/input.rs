//! Player input intents
//!
//! The host maps key presses to [`InputIntent`]s and pushes them through an
//! [`InputChannel`]; the game drains the channel at the start of every tick.
//! The queue is guarded by a critical section so an interrupt handler or UI
//! thread may push while the game loop drains.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// What the player asked for since the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// Change the player's speed by `delta` (key down: +/-1, key up: undo)
    MoveBy(i32),
    /// Start an attack window
    Attack,
    /// Bring an enemy to life at `position`
    SpawnEnemy {
        position: i32,
        speed: i32,
        wobble: i32,
    },
}

/// Returned when the channel is full; carries the rejected intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub InputIntent);

/// Bounded intent queue holding up to `SIZE` intents
pub struct InputChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<InputIntent, SIZE>>>,
}

impl<const SIZE: usize> InputChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the input side
    pub const fn sender(&self) -> InputSender<'_, SIZE> {
        InputSender { channel: self }
    }

    /// Handle for the game loop
    pub const fn receiver(&self) -> InputReceiver<'_, SIZE> {
        InputReceiver { channel: self }
    }

    fn push(&self, intent: InputIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(intent)
                .map_err(TrySendError)
        })
    }

    fn pop(&self) -> Option<InputIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for InputChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct InputSender<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> InputSender<'_, SIZE> {
    /// Queue an intent, handing it back if the queue is full
    pub fn try_send(&self, intent: InputIntent) -> Result<(), TrySendError> {
        self.channel.push(intent)
    }
}

#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> InputReceiver<'_, SIZE> {
    /// Take the oldest pending intent
    pub fn try_receive(&self) -> Option<InputIntent> {
        self.channel.pop()
    }

    /// Iterate over every pending intent, oldest first
    pub fn drain(&self) -> impl Iterator<Item = InputIntent> + '_ {
        core::iter::from_fn(|| self.try_receive())
    }
}
