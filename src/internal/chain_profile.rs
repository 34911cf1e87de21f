#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use chaintable::{djb2, fnv1};
use plotters::prelude::*;
use rand::Rng;
use rand::distr::Alphanumeric;

// Fixed bucket count for the placement simulation; the load factor is swept
// by varying the number of keys instead.
const BUCKET_COUNT: usize = 100_000;
// Create load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;
const KEY_LENGTH: usize = 12;

// Digest functions to compare
const METHODS: [&str; 2] = ["djb2", "fnv1"];

fn digest_for(method: &str, key: &str) -> u64 {
    if method == "fnv1" { fnv1(key) } else { djb2(key) }
}

fn random_key(rng: &mut impl Rng) -> String {
    (0..KEY_LENGTH).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    // Calculate number of keys for each load factor
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (BUCKET_COUNT as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Results storage, indexed [method][load factor step]
    let mut mean_chain_len: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut worst_chain_len: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];

    // Generate random keys outside the loop so both digests see the same data
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap_or(&0);
    let keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    // Running experiments
    for &n_keys in &num_keys {
        println!("Placing {} keys into {} buckets", n_keys, BUCKET_COUNT);

        for (method_idx, &method) in METHODS.iter().enumerate() {
            let mut chain_lengths: Vec<usize> = vec![0; BUCKET_COUNT];

            for key in keys.iter().take(n_keys) {
                let index = (digest_for(method, key) % BUCKET_COUNT as u64) as usize;
                chain_lengths[index] += 1;
            }

            // Calculate statistics over the occupied buckets
            let occupied = chain_lengths.iter().filter(|&&len| len > 0).count();
            let mean = n_keys as f64 / occupied.max(1) as f64;
            let worst = chain_lengths.iter().copied().max().unwrap_or(0);

            // Store results
            mean_chain_len[method_idx].push(mean);
            worst_chain_len[method_idx].push(worst);

            println!(
                "  {}: Occupied buckets = {}, Mean chain = {:.3}, Worst chain = {}",
                method, occupied, mean, worst
            );
        }
    }

    // Plot configuration
    let font_family = "sans-serif";

    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];

    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Create custom x-axis labels
    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: Mean occupied-chain length
    let root = BitMapBackend::new("mean_chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_mean = mean_chain_len
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean Chain Length per Occupied Bucket", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..num_keys.len(), 0.0..max_mean)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Placed")
        .y_desc("Mean Chain Length (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len()).map(|i| (i, mean_chain_len[method_idx][i])),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len()).map(|i| {
            Circle::new((i, mean_chain_len[method_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst chain length
    let root = BitMapBackend::new("worst_chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_worst = worst_chain_len
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst-Case Chain Length", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..num_keys.len(), 0.0..max_worst)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Placed")
        .y_desc("Worst Chain Length (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len()).map(|i| (i, worst_chain_len[method_idx][i] as f64)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len()).map(|i| {
            Circle::new((i, worst_chain_len[method_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: mean_chain_length.png, worst_chain_length.png");

    Ok(())
}
