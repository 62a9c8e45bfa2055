/*
 * Driftfield
 *
 * An ambient animated background: a field of drifting particles joined by
 * faint lines when they come near each other or near the pointer.
 *
 * Set RUST_LOG (e.g. RUST_LOG=driftfield=debug) to see lifecycle logging.
 */

use driftfield::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
