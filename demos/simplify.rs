// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fits a densely sampled sine wave and a noisy circle, printing an SVG that
//! shows the sample polylines underneath the fitted paths.

use bezfit::{simplify_svg_path, Point, SimplifyOptions};

fn sample_fn(f: &dyn Fn(f64) -> f64, xa: f64, xb: f64, n: usize) -> Vec<Point> {
    let width = 800.;
    let dx = (xb - xa) / n as f64;
    let xs = width / (xb - xa);
    let ys = 120.;
    let y_origin = 150.;
    (0..=n)
        .map(|i| {
            let x = xa + dx * i as f64;
            Point::new((x - xa) * xs, y_origin - f(x) * ys)
        })
        .collect()
}

fn sample_circle(center: Point, radius: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let th = i as f64 * core::f64::consts::TAU / n as f64;
            // A small wobble so the fit has something to smooth out.
            let r = radius + 2. * (th * 17.).sin();
            Point::new(center.x + r * th.cos(), center.y + r * th.sin())
        })
        .collect()
}

fn polyline(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format!("{},{}", p.x, p.y));
    }
    d
}

fn main() {
    println!("<svg width='800' height='600' xmlns='http://www.w3.org/2000/svg'>");

    let wave = sample_fn(&|x| x.sin(), -8., 8., 400);
    let options = SimplifyOptions::default().tolerance(1.0).precision(2);
    let fitted = simplify_svg_path(wave.iter().copied(), &options).unwrap();
    println!(
        "  <path d='{}' stroke='#8c8' fill='none' stroke-width='5'/>",
        polyline(&wave)
    );
    println!("  <path d='{fitted}' stroke='#000' fill='none' stroke-width='1'/>");

    let ring = sample_circle(Point::new(400., 440.), 120., 300);
    let options = SimplifyOptions::default().closed(true).tolerance(4.0);
    let fitted = simplify_svg_path(ring.iter().copied(), &options).unwrap();
    println!(
        "  <path d='{}Z' stroke='#8c8' fill='none' stroke-width='5'/>",
        polyline(&ring)
    );
    println!("  <path d='{fitted}' stroke='#000' fill='none' stroke-width='1'/>");

    println!("</svg>");
}
