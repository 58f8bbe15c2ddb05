#[allow(dead_code)]
#[path = "../src/bin/export_frames.rs"]
mod export_frames;

use clap::Parser;
use pulsecage::params::SpinMode;
use std::path::{Path, PathBuf};

fn write_wav(path: &Path, sample: impl Fn(usize) -> f32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
    for i in 0..44_100 / 5 {
        let v = (sample(i).clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(v).expect("write sample");
    }
    writer.finalize().expect("finalize wav");
}

// ── Argument parsing ────────────────────────────────────────────────────

#[test]
fn parse_args_defaults_are_stable() {
    let args =
        export_frames::Args::try_parse_from(["export_frames"]).expect("parse should succeed");

    assert_eq!(args.scene, "classic");
    assert_eq!(args.audio, None);
    assert_eq!(args.seconds, 5.0);
    assert_eq!(args.fps, 60);
    assert_eq!(args.width, 640);
    assert_eq!(args.height, 360);
    assert_eq!(args.out, PathBuf::from("export"));
}

#[test]
fn parse_args_overrides_work() {
    let args = export_frames::Args::try_parse_from([
        "export_frames",
        "--scene",
        "orbit",
        "--audio",
        "song.wav",
        "--seconds",
        "2.5",
        "--fps",
        "30",
        "--width",
        "320",
        "--height",
        "180",
        "--out",
        "clips",
    ])
    .expect("parse should succeed");

    assert_eq!(args.scene, "orbit");
    assert_eq!(args.audio, Some(PathBuf::from("song.wav")));
    assert_eq!(args.seconds, 2.5);
    assert_eq!(args.fps, 30);
    assert_eq!(args.width, 320);
    assert_eq!(args.height, 180);
    assert_eq!(args.out, PathBuf::from("clips"));
}

// ── Validation and frame math ───────────────────────────────────────────

#[test]
fn validate_rejects_zero_fps() {
    let args = export_frames::Args::try_parse_from(["export_frames", "--fps", "0"])
        .expect("parse should succeed");

    let err = export_frames::validate_args(&args).expect_err("fps=0 must fail validation");
    assert!(err.contains("--fps"));
}

#[test]
fn validate_rejects_non_positive_length() {
    let args = export_frames::Args::try_parse_from(["export_frames", "--seconds", "0"])
        .expect("parse should succeed");

    let err = export_frames::validate_args(&args).expect_err("seconds=0 must fail validation");
    assert!(err.contains("--seconds"));
}

#[test]
fn frame_math_rounds_up_and_never_hits_zero() {
    assert_eq!(export_frames::frame_count(5.0, 60), 300);
    assert_eq!(export_frames::frame_count(2.0, 30), 60);
    assert_eq!(export_frames::frame_count(2.999, 30), 90);
    assert_eq!(export_frames::frame_count(0.01, 60), 1);
}

#[test]
fn scene_lookup_is_case_insensitive_with_classic_fallback() {
    assert_eq!(export_frames::scene_by_name("orbit").spin, SpinMode::Orbit);
    assert_eq!(export_frames::scene_by_name("ORBIT").spin, SpinMode::Orbit);
    assert_eq!(export_frames::scene_by_name("classic").spin, SpinMode::Tumble);
    assert_eq!(export_frames::scene_by_name("waves").spin, SpinMode::Tumble);
}

// ── Energy track ────────────────────────────────────────────────────────

#[test]
fn energy_track_stays_zero_for_a_silent_wav() {
    let path = std::env::temp_dir().join("pulsecage_export_silence.wav");
    write_wav(&path, |_| 0.0);

    let track = export_frames::energy_track(&path, 12, 60).expect("wav readable");
    std::fs::remove_file(&path).ok();

    assert_eq!(track.len(), 12);
    assert!(track.iter().all(|&e| e == 0.0));
}

#[test]
fn energy_track_responds_to_a_tone() {
    let path = std::env::temp_dir().join("pulsecage_export_tone.wav");
    write_wav(&path, |i| {
        (i as f32 * 440.0 * std::f32::consts::TAU / 44_100.0).sin() * 0.8
    });

    let track = export_frames::energy_track(&path, 12, 60).expect("wav readable");
    std::fs::remove_file(&path).ok();

    assert_eq!(track.len(), 12);
    assert!(track[track.len() - 1] > 0.0);
}
