use crate::engine::{Bob, DoublePendulum, Pendulum};

/// Advance a single pendulum by one tick using semi-implicit Euler integration
pub fn advance_pendulum(pendulum: &mut Pendulum) {
    let params = pendulum.params;
    let bob = &mut pendulum.bob;

    bob.acceleration = -params.gravity / bob.arm_length * bob.angle.sin();
    step_bob(bob, params.tick);
    bob.pos = pendulum.pivot + bob.arm_offset(params.scale);
}

/// Advance a double pendulum by one tick.
///
/// Both angular accelerations come from the pre-tick state. The second bob is
/// then placed relative to the first bob's position for this tick, not the
/// previous one.
pub fn advance_double_pendulum(pendulum: &mut DoublePendulum) {
    let params = pendulum.params;
    let (first_accel, second_accel) =
        double_pendulum_accelerations(&pendulum.first, &pendulum.second, params.gravity);

    let a = &mut pendulum.first;
    a.acceleration = first_accel;
    step_bob(a, params.tick);
    a.pos = pendulum.pivot + a.arm_offset(params.scale);

    let b = &mut pendulum.second;
    b.acceleration = second_accel;
    step_bob(b, params.tick);
    b.pos = pendulum.first.pos + b.arm_offset(params.scale);
}

/// Angular accelerations of both bobs from the Lagrangian equations of motion
pub fn double_pendulum_accelerations(a: &Bob, b: &Bob, gravity: f64) -> (f64, f64) {
    let g = gravity;
    let delta = a.angle - b.angle;
    let denominator = mass_denominator(a.mass, b.mass, a.angle, b.angle);

    let first = (-g * (2.0 * a.mass + b.mass) * a.angle.sin()
        - b.mass * g * (a.angle - 2.0 * b.angle).sin()
        - 2.0
            * delta.sin()
            * b.mass
            * (b.velocity.powi(2) * b.arm_length
                + a.velocity.powi(2) * a.arm_length * delta.cos()))
        / (a.arm_length * denominator);

    let second = (2.0
        * delta.sin()
        * (a.velocity.powi(2) * a.arm_length * (a.mass + b.mass)
            + g * (a.mass + b.mass) * a.angle.cos()
            + b.velocity.powi(2) * b.arm_length * b.mass * delta.cos()))
        / (b.arm_length * denominator);

    (first, second)
}

/// Shared mass term of both acceleration denominators
pub fn mass_denominator(first_mass: f64, second_mass: f64, first_angle: f64, second_angle: f64) -> f64 {
    2.0 * first_mass + second_mass
        - second_mass * (2.0 * first_angle - 2.0 * second_angle).cos()
}

// Semi-implicit Euler: v += a*dt, then angle += v*dt
fn step_bob(bob: &mut Bob, dt: f64) {
    bob.velocity += bob.acceleration * dt;
    bob.angle += bob.velocity * dt;
}
