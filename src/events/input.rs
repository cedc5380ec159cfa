//! Input events and the observers that route them to actors.
//!
//! Flow:
//! 1. The host triggers a [`KeyEvent`] for every key going down or up.
//! 2. [`key_event_observer`] updates [`KeyboardState`] and, for keys bound in
//!    [`InputBindings`], triggers a [`DirectionInputEvent`]. Other keys stop
//!    here.
//! 3. [`direction_input_observer`] applies the direction to every standalone
//!    [`InputControlled`] actor; [`body_input_observer`] forwards it to every
//!    part of every [`InputControlled`] body.
//!
//! Install with [`register_input_observers`] and, once per body-part type,
//! [`register_body_observers`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::animation::AnimatedVisual;
use crate::components::compositebody::{BodyPart, CompositeBody};
use crate::components::directional::{Direction, DirectionInput, DirectionalController};
use crate::components::inputcontrolled::InputControlled;
use crate::resources::input::{InputBindings, Key, KeyboardState};

/// Raw key transition coming from the host.
#[derive(Event, Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    /// Whether the key was pressed (true) or released (false).
    pub pressed: bool,
}

/// A bound key resolved to its direction.
#[derive(Event, Debug, Clone, Copy)]
pub struct DirectionInputEvent {
    pub direction: Direction,
    pub pressed: bool,
}

impl DirectionInputEvent {
    pub fn input(&self) -> DirectionInput {
        DirectionInput {
            direction: self.direction,
            pressed: self.pressed,
        }
    }
}

pub fn key_event_observer(
    trigger: On<KeyEvent>,
    bindings: Res<InputBindings>,
    mut keyboard: ResMut<KeyboardState>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.pressed {
        keyboard.press(event.key);
    } else {
        keyboard.release(event.key);
    }
    if let Some(direction) = bindings.direction_for(event.key) {
        commands.trigger(DirectionInputEvent {
            direction,
            pressed: event.pressed,
        });
    }
}

/// Drive standalone actors. Body parts are not [`InputControlled`]; their
/// body forwards input instead.
pub fn direction_input_observer(
    trigger: On<DirectionInputEvent>,
    mut actors: Query<(&mut DirectionalController, &mut AnimatedVisual), With<InputControlled>>,
) {
    let input = trigger.event().input();
    for (mut controller, mut visual) in actors.iter_mut() {
        controller.apply(input, &mut visual);
    }
}

/// Broadcast a direction to every part of every input-controlled body,
/// visible or not.
pub fn body_input_observer<P: BodyPart>(
    trigger: On<DirectionInputEvent>,
    bodies: Query<&CompositeBody<P>, With<InputControlled>>,
    mut parts: Query<(&mut DirectionalController, &mut AnimatedVisual)>,
) {
    let input = trigger.event().input();
    for body in bodies.iter() {
        for entity in body.entities() {
            if let Ok((mut controller, mut visual)) = parts.get_mut(entity) {
                controller.apply(input, &mut visual);
            }
        }
    }
}

/// Insert the keyboard resources (if missing) and the key/actor observers.
pub fn register_input_observers(world: &mut World) {
    world.init_resource::<InputBindings>();
    world.init_resource::<KeyboardState>();
    world.add_observer(key_event_observer);
    world.add_observer(direction_input_observer);
}

pub fn register_body_observers<P: BodyPart>(world: &mut World) {
    world.add_observer(body_input_observer::<P>);
}
