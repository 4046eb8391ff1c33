/*
 * Particle Mirror
 *
 * Ten thousand particles chase (or flee) a set of target points. Targets come
 * from the mouse here; the particles follow them with a spring-like pull, or
 * scatter away in repel mode, and are painted with one of six themes.
 *
 * Space toggles attract/repel, T or a right click cycles the theme,
 * V shows debug info and P pauses.
 */

use particle_mirror::app::{model, update};

fn main() {
    env_logger::init();

    nannou::app(model)
        .update(update)
        .run();
}
