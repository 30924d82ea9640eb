//! Guided tour of the lanewise vector types.
//!
//! This example walks through construction, elementwise arithmetic, masked
//! operations, horizontal reductions, slice I/O, and width changes.

use aligned_vec::{AVec, ConstAlign};
use lanewise::prelude::*;

fn main() {
    println!("Lanewise - Fixed-Width Vector Tour\n");
    println!("Active backend: {}", active_isa());
    println!(
        "Natural alignments: f32x4 = {}, f32x8 = {}, f32x16 = {}\n",
        Vector::<f32, 4>::ALIGN,
        Vector::<f32, 8>::ALIGN,
        Vector::<f32, 16>::ALIGN,
    );

    // --- Construction and elementwise arithmetic ---

    let prices = Vector::new([4.0f32, 8.0, 15.0, 16.0]);
    let discounted = prices * 0.5;
    println!("prices     = {:?}", prices.to_array());
    println!("half price = {:?}", discounted.to_array());
    println!("difference = {:?}", (prices - discounted).to_array());

    // --- Comparisons and masked updates ---

    println!("\n--- Masked Operations ---\n");

    let cheap = discounted.cmp_lt(5.0);
    println!(
        "lanes under 5.0: {:?} ({} of {})",
        cheap.to_array(),
        cheap.count_true(),
        Mask::<4>::LANES,
    );

    // Surcharge only the cheap lanes; the rest pass through unchanged.
    let adjusted = discounted.masked_add(cheap, 100.0);
    println!("surcharged = {:?}", adjusted.to_array());

    // Clamp to a band using min/max.
    let clamped = discounted.min(7.0).max(3.0);
    println!("clamped    = {:?}", clamped.to_array());

    // --- Horizontal reductions ---

    println!("\n--- Reductions ---\n");

    let v = Vector::new([2.0f32, 4.0, 6.0, 8.0]);
    println!("sum  of {:?} = {}", v.to_array(), v.horizontal_sum());
    println!("max  of {:?} = {}", v.to_array(), v.horizontal_max());

    let ends = Mask::new([true, false, false, true]);
    println!(
        "sum of the end lanes only = {}",
        v.masked_horizontal_sum(ends)
    );

    let weights = Vector::new([0.1f32, 0.2, 0.3, 0.4]);
    println!("dot(v, weights) = {}", v.dot(weights));

    // --- Slice loads and stores ---

    println!("\n--- Memory ---\n");

    let samples: Vec<f32> = (1..=10).map(|i| i as f32).collect();
    let mut total = 0.0f32;
    let mut chunks = samples.chunks_exact(4);
    for chunk in &mut chunks {
        total += Vector::<f32, 4>::load(chunk).unwrap().horizontal_sum();
    }

    // The tail is shorter than a vector; pad with zeros and mask the sum.
    let tail = chunks.remainder();
    let tail_mask = Mask::<4>::from_fn(|i| i < tail.len());
    let padded = Vector::<f32, 4>::load_or_zero(tail);
    total += padded.masked_horizontal_sum(tail_mask);
    println!("sum of {:?} = {}", samples, total);

    // Aligned round trip through an over-aligned buffer.
    let mut buf: AVec<f32, ConstAlign<64>> = AVec::new(64);
    for i in 0..8 {
        buf.push(i as f32);
    }
    let loaded = Vector::<f32, 8>::load_aligned(&buf[..]).unwrap();
    (loaded * 10.0).store_aligned(&mut buf[..]).unwrap();
    println!("aligned buffer after scale = {:?}", &buf[..]);

    // --- Changing width ---

    println!("\n--- Width Changes ---\n");

    let shorts = Vector::<i16, 8>::new([1, -2, 3, -4, 5, -6, 7, -8]);
    let widened: Vector<i32, 8> = shorts.widen();
    println!("i16 lanes  = {:?}", shorts.to_array());
    println!("as i32     = {:?}", widened.to_array());

    let (lo, hi) = widened.unpack();
    println!("low half   = {:?}", lo.to_array());
    println!("high half  = {:?}", hi.to_array());
    let swapped = Vector::<i32, 8>::pack(hi, lo);
    println!("halves swapped = {:?}", swapped.to_array());

    let bits = Vector::new([1.0f32, -1.0, 0.5, f32::INFINITY]).bitcast_u32();
    print!("f32 bit patterns =");
    for lane in bits.to_array() {
        print!(" {:#010x}", lane);
    }
    println!();

    println!("\nDone!");
}
