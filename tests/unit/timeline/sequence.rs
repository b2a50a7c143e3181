use super::*;

fn fps40() -> Fps {
    Fps::new(40, 1).unwrap()
}

fn story() -> Timeline {
    Timeline::from_scenes(fps40(), &SceneId::STORY).unwrap()
}

#[test]
fn scene_durations_sum_to_timeline_length() {
    let t = story();
    let sum: u64 = t.slots().iter().map(|s| s.range.len_frames()).sum();
    assert_eq!(sum, t.duration());
    assert_eq!(t.duration(), 2160);
    assert_eq!(t.duration_secs(), 54.0);
}

#[test]
fn starts_are_prefix_sums() {
    let t = story();
    let starts = t.slots().iter().map(|s| s.range.start.0).collect::<Vec<_>>();
    assert_eq!(starts, vec![0, 560, 960, 1360, 1760]);
}

#[test]
fn locate_maps_scene_boundaries() {
    let t = story();

    let c = t.locate(FrameIndex(0)).unwrap();
    assert_eq!((c.scene, c.local, c.index), (SceneId::Scene1, 0, 0));

    let c = t.locate(FrameIndex(559)).unwrap();
    assert_eq!((c.scene, c.local), (SceneId::Scene1, 559));

    let c = t.locate(FrameIndex(560)).unwrap();
    assert_eq!((c.scene, c.local), (SceneId::Scene2, 0));
    assert_eq!(c.duration(), 400);

    let c = t.locate(FrameIndex(2159)).unwrap();
    assert_eq!((c.scene, c.local), (SceneId::Scene5, 399));

    assert!(t.locate(FrameIndex(2160)).is_none());
}

#[test]
fn scene_frame_is_signed_relative_offset() {
    let t = story();
    assert_eq!(t.scene_frame(FrameIndex(1000), SceneId::Scene3), Some(40));
    assert_eq!(t.scene_frame(FrameIndex(100), SceneId::Scene3), Some(-860));
    assert_eq!(t.scene_frame(FrameIndex(100), SceneId::AudioCheck), None);
}

#[test]
fn invalid_timelines_are_rejected() {
    assert!(Timeline::from_durations(fps40(), []).is_err());
    assert!(Timeline::from_durations(fps40(), [(SceneId::Scene1, 0)]).is_err());
    assert!(
        Timeline::from_durations(fps40(), [(SceneId::Scene1, 10), (SceneId::Scene1, 10)])
            .is_err()
    );
}

#[test]
fn scene_ids_parse_case_insensitively() {
    assert_eq!(SceneId::parse("scene4").unwrap(), SceneId::Scene4);
    assert_eq!(SceneId::parse("AudioCheck").unwrap(), SceneId::AudioCheck);
    assert!(SceneId::parse("Scene9").is_err());
}
