//! Write two byte strings into arena memory, dump every region, release.

use kiln_arena::{AllocHandle, Arena, ArenaConfig};

/// Store a message one byte per allocation unit and return its handle.
fn store(arena: &mut Arena, msg: &str) -> AllocHandle {
    // One unit per byte plus a terminator; four request bytes buy one unit.
    let handle = arena.alloc((msg.len() + 1) * 4).expect("allocation failed");
    let slot = arena.slice_mut(handle);
    for (i, byte) in msg.bytes().enumerate() {
        slot[i] = byte as usize;
    }
    handle
}

/// Read a stored message back out of the arena.
fn load(arena: &Arena, handle: AllocHandle) -> String {
    arena
        .slice(handle)
        .iter()
        .take_while(|&&w| w != 0)
        .map(|&w| w as u8 as char)
        .collect()
}

fn main() {
    // Tiny regions so the second message forces the chain to grow.
    let mut arena = Arena::with_config(ArenaConfig::new(16));

    let first = store(&mut arena, "Hello, world!");
    let second = store(&mut arena, "Yet another hello!");

    for index in 0..arena.region_count() {
        println!();
        print!("{}", arena.dump(index).expect("region exists"));
    }

    println!();
    println!("{}", load(&arena, first));
    println!();
    println!("{}", load(&arena, second));

    arena.release();
}
