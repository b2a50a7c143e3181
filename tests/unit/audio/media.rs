use super::*;

#[test]
fn f32le_bytes_decode_in_order() {
    let mut bytes = Vec::new();
    for v in [0.5f32, -1.0, 0.25] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    assert_eq!(pcm_from_f32le(&bytes).unwrap(), vec![0.5, -1.0, 0.25]);
    assert!(pcm_from_f32le(&bytes[..5]).is_err());
}

#[test]
fn pcm_duration_counts_frames_not_samples() {
    let pcm = AudioPcm {
        sample_rate: 4,
        channels: 2,
        interleaved_f32: vec![0.0; 16],
    };
    assert_eq!(pcm.frames(), 8);
    assert_eq!(pcm.duration_secs(), 2.0);
    assert_eq!(AudioPcm::default().duration_secs(), 0.0);
}

#[test]
fn missing_file_is_an_asset_error() {
    let err = decode_audio_f32_stereo(Path::new("no/such/narration.m4a"), MIX_SAMPLE_RATE)
        .unwrap_err();
    assert!(matches!(err, OrreryError::Asset { .. }));
}
