//! Per-frame input sampling
//!
//! The window layer hands over raw key and mouse state once per frame;
//! [`InputSystem`] turns it into an [`InputSnapshot`] where every logical
//! [`Action`] and [`MouseButton`] carries pressed / held / released flags,
//! edge-detected against the previous frame.
//!
//! # Sticky bindings
//!
//! An action may be bound to several keys. The system *tracks* one binding
//! per action: whichever alternate key was most recently seen down. The
//! action's flags then follow that key alone, and switching keys mid-hold
//! reads as one continuous hold.
//!
//! The key type is generic so the core stays independent of the windowing
//! library; the binary plugs in SDL2 scancodes.

/// High-level actions the player can trigger from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Swap the active tile with the held one
    Hold = 0,
    /// Start a fresh board
    Restart = 1,
    /// Leave the game
    Back = 2,
    /// Toggle audio (ignored by the core)
    Mute = 3,
    /// Snap the camera back to the starting tile
    Centre = 4,
}

impl Action {
    pub const COUNT: usize = 5;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Hold,
        Action::Restart,
        Action::Back,
        Action::Mute,
        Action::Centre,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];
}

/// Edge-detected state of one button for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Currently down
    pub held: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonState {
    pub fn from_edges(was_down: bool, is_down: bool) -> Self {
        ButtonState {
            pressed: is_down && !was_down,
            held: is_down,
            released: !is_down && was_down,
        }
    }
}

/// Everything the game scene needs to know about input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    actions: [ButtonState; Action::COUNT],
    mouse: [ButtonState; 3],
    /// Mouse position in logical screen pixels
    pub mouse_x: i32,
    pub mouse_y: i32,
}

impl InputSnapshot {
    pub fn action(&self, action: Action) -> ButtonState {
        self.actions[action.index()]
    }

    pub fn mouse(&self, button: MouseButton) -> ButtonState {
        self.mouse[button as usize]
    }

    /// Builds a snapshot directly, for scripted input
    pub fn with_action(mut self, action: Action, state: ButtonState) -> Self {
        self.actions[action.index()] = state;
        self
    }

    pub fn with_mouse(mut self, button: MouseButton, state: ButtonState) -> Self {
        self.mouse[button as usize] = state;
        self
    }

    pub fn at(mut self, mouse_x: i32, mouse_y: i32) -> Self {
        self.mouse_x = mouse_x;
        self.mouse_y = mouse_y;
        self
    }
}

/// Turns raw key/mouse state into [`InputSnapshot`]s, frame after frame
pub struct InputSystem<K> {
    bindings: [Vec<K>; Action::COUNT],
    tracked: [Option<K>; Action::COUNT],
    last_action_down: [bool; Action::COUNT],
    last_mouse_down: [bool; 3],
}

impl<K: Copy + PartialEq> InputSystem<K> {
    /// Creates a system from `(action, keys)` pairs. The first key listed for
    /// an action is tracked until another one is pressed; unbound actions
    /// never fire.
    pub fn new(bindings: impl IntoIterator<Item = (Action, Vec<K>)>) -> Self {
        let mut table: [Vec<K>; Action::COUNT] = Default::default();
        for (action, keys) in bindings {
            table[action.index()] = keys;
        }
        let tracked = std::array::from_fn(|i| table[i].first().copied());

        InputSystem {
            bindings: table,
            tracked,
            last_action_down: [false; Action::COUNT],
            last_mouse_down: [false; 3],
        }
    }

    /// Samples one frame.
    ///
    /// * `is_down` - raw state of a bound key
    /// * `mouse_down` - raw state of left, middle and right buttons
    /// * `mouse_position` - pointer in logical screen pixels
    pub fn sample(
        &mut self,
        is_down: impl Fn(K) -> bool,
        mouse_down: [bool; 3],
        mouse_position: (i32, i32),
    ) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default().at(mouse_position.0, mouse_position.1);

        for action in Action::ALL {
            let i = action.index();

            for &key in &self.bindings[i] {
                if Some(key) == self.tracked[i] {
                    continue;
                }
                // An alternate key is down: follow it from now on
                if is_down(key) {
                    self.tracked[i] = Some(key);
                }
            }

            let down = self.tracked[i].is_some_and(&is_down);
            snapshot.actions[i] = ButtonState::from_edges(self.last_action_down[i], down);
            self.last_action_down[i] = down;
        }

        for button in MouseButton::ALL {
            let i = button as usize;
            snapshot.mouse[i] = ButtonState::from_edges(self.last_mouse_down[i], mouse_down[i]);
        }
        self.last_mouse_down = mouse_down;

        snapshot
    }

    /// Key currently followed for `action`
    pub fn tracked_binding(&self, action: Action) -> Option<K> {
        self.tracked[action.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn system() -> InputSystem<char> {
        InputSystem::new([
            (Action::Hold, vec!['h', ' ']),
            (Action::Restart, vec!['r']),
            (Action::Back, vec!['q']),
        ])
    }

    fn sample(input: &mut InputSystem<char>, keys: &[char]) -> InputSnapshot {
        let down: HashSet<char> = keys.iter().copied().collect();
        input.sample(|k| down.contains(&k), [false; 3], (0, 0))
    }

    #[test]
    fn test_button_edges() {
        assert_eq!(
            ButtonState::from_edges(false, true),
            ButtonState { pressed: true, held: true, released: false }
        );
        assert_eq!(
            ButtonState::from_edges(true, true),
            ButtonState { pressed: false, held: true, released: false }
        );
        assert_eq!(
            ButtonState::from_edges(true, false),
            ButtonState { pressed: false, held: false, released: true }
        );
        assert_eq!(ButtonState::from_edges(false, false), ButtonState::default());
    }

    #[test]
    fn test_press_hold_release_sequence() {
        let mut input = system();

        let frame = sample(&mut input, &['r']);
        assert!(frame.action(Action::Restart).pressed);

        let frame = sample(&mut input, &['r']);
        assert!(!frame.action(Action::Restart).pressed);
        assert!(frame.action(Action::Restart).held);

        let frame = sample(&mut input, &[]);
        assert!(frame.action(Action::Restart).released);
        assert!(!frame.action(Action::Restart).held);
    }

    #[test]
    fn test_first_binding_is_tracked_initially() {
        let input = system();
        assert_eq!(input.tracked_binding(Action::Hold), Some('h'));
        assert_eq!(input.tracked_binding(Action::Mute), None);
    }

    #[test]
    fn test_alternate_binding_becomes_sticky() {
        let mut input = system();

        let frame = sample(&mut input, &[' ']);
        assert_eq!(input.tracked_binding(Action::Hold), Some(' '));
        assert!(frame.action(Action::Hold).pressed);

        // Switching keys mid-hold reads as one continuous hold
        let frame = sample(&mut input, &['h']);
        assert_eq!(input.tracked_binding(Action::Hold), Some('h'));
        assert!(frame.action(Action::Hold).held);
        assert!(!frame.action(Action::Hold).pressed);

        let frame = sample(&mut input, &[]);
        assert!(frame.action(Action::Hold).released);
        assert_eq!(input.tracked_binding(Action::Hold), Some('h'));

        let frame = sample(&mut input, &['h']);
        assert!(frame.action(Action::Hold).pressed);
    }

    #[test]
    fn test_unbound_action_never_fires() {
        let mut input = system();
        let frame = sample(&mut input, &['m', 'h', 'r', 'q']);
        assert_eq!(frame.action(Action::Mute), ButtonState::default());
        assert_eq!(frame.action(Action::Centre), ButtonState::default());
    }

    #[test]
    fn test_mouse_edges_and_position() {
        let mut input = system();
        let frame = input.sample(|_| false, [true, false, false], (12, 34));
        assert!(frame.mouse(MouseButton::Left).pressed);
        assert_eq!((frame.mouse_x, frame.mouse_y), (12, 34));

        let frame = input.sample(|_| false, [false, false, true], (12, 34));
        assert!(frame.mouse(MouseButton::Left).released);
        assert!(frame.mouse(MouseButton::Right).pressed);
        assert!(!frame.mouse(MouseButton::Middle).held);
    }

    #[test]
    fn test_scripted_snapshot() {
        let pressed = ButtonState::from_edges(false, true);
        let frame = InputSnapshot::default()
            .with_action(Action::Back, pressed)
            .with_mouse(MouseButton::Right, pressed)
            .at(5, 6);
        assert!(frame.action(Action::Back).pressed);
        assert!(frame.mouse(MouseButton::Right).pressed);
        assert!(!frame.action(Action::Hold).held);
    }
}
