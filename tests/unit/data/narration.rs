use super::*;
use crate::foundation::core::Fps;

fn story() -> Timeline {
    Timeline::from_scenes(Fps::new(40, 1).unwrap(), &SceneId::STORY).unwrap()
}

fn seg(id: &str, scene: SceneId, start: u64, end: u64) -> NarrationSegment {
    NarrationSegment {
        id: id.to_string(),
        scene_id: scene,
        text: "",
        audio: format!("{id}.m4a"),
        range: FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap(),
    }
}

#[test]
fn segments_are_monotonic_and_non_overlapping() {
    let track = NarrationTrack::for_timeline(&story());
    track.validate_against(&story()).unwrap();
    for pair in track.segments().windows(2) {
        assert!(pair[0].start() < pair[1].start());
        assert!(pair[0].end() <= pair[1].start());
    }
}

#[test]
fn one_segment_per_scene_covering_the_scene() {
    let t = story();
    let track = NarrationTrack::for_timeline(&t);
    assert_eq!(track.segments().len(), 5);
    assert_eq!(track.total_duration(), t.duration());

    let s2 = track.segment_for_scene(SceneId::Scene2).unwrap();
    assert_eq!(s2.id, "scene2-narration");
    assert_eq!(s2.audio, "scene2-narration.m4a");
    assert_eq!(s2.start(), FrameIndex(560));
    assert_eq!(s2.end(), FrameIndex(960));
    assert!(s2.text.contains("solar flares"));
}

#[test]
fn scene_frame_and_lookup() {
    let track = NarrationTrack::for_timeline(&story());
    assert_eq!(track.segment_start(SceneId::Scene4), FrameIndex(1360));
    assert_eq!(track.scene_frame(FrameIndex(1400), SceneId::Scene4), 40);
    assert_eq!(track.segment_start(SceneId::AudioCheck), FrameIndex(0));
    assert_eq!(
        track.segment_at(FrameIndex(559)).unwrap().scene_id,
        SceneId::Scene1
    );
    assert_eq!(
        track.segment_at(FrameIndex(560)).unwrap().scene_id,
        SceneId::Scene2
    );
    assert!(track.segment_at(FrameIndex(2160)).is_none());
}

#[test]
fn audio_check_reuses_the_first_recording() {
    let t = Timeline::from_scenes(Fps::new(40, 1).unwrap(), &[SceneId::AudioCheck]).unwrap();
    let track = NarrationTrack::for_timeline(&t);
    assert_eq!(track.segments()[0].audio, "scene1-narration.m4a");
    assert_eq!(track.total_duration(), 560);
}

#[test]
fn overlapping_or_unordered_segments_are_rejected() {
    let overlap = vec![
        seg("a", SceneId::Scene1, 0, 800),
        seg("b", SceneId::Scene2, 560, 960),
    ];
    assert!(NarrationTrack::from_segments(overlap).is_err());

    let unordered = vec![
        seg("b", SceneId::Scene2, 560, 960),
        seg("a", SceneId::Scene1, 0, 560),
    ];
    assert!(NarrationTrack::from_segments(unordered).is_err());

    let empty = vec![seg("a", SceneId::Scene1, 10, 10)];
    assert!(NarrationTrack::from_segments(empty).is_err());
}

#[test]
fn segments_must_fit_their_scene() {
    let long_intro =
        NarrationTrack::from_segments(vec![seg("a", SceneId::Scene1, 0, 800)]).unwrap();
    let err = long_intro.validate_against(&story()).unwrap_err();
    assert!(err.to_string().contains("exceeds scene"));

    let stray =
        NarrationTrack::from_segments(vec![seg("x", SceneId::AudioCheck, 0, 100)]).unwrap();
    assert!(stray.validate_against(&story()).is_err());
}
