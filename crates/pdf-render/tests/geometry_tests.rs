use pdf_render::*;

#[test]
fn test_zero_bleed_preserves_base_dimensions() {
    let job = RenderJob::default();
    let geometry = compute_geometry(&job, resolve_preset(None), resolve_page_format(None));

    assert_eq!(geometry.bleed_mm, 0.0);
    assert_eq!(geometry.total_width_mm, 210.0);
    assert_eq!(geometry.total_height_mm, 297.0);
    assert_eq!(geometry.base_width_mm, geometry.total_width_mm);
    assert_eq!(geometry.base_height_mm, geometry.total_height_mm);
}

#[test]
fn test_bleed_expands_totals_on_both_edges() {
    for bleed_mm in [0.0_f32, 0.5, 1.0, 3.0, 5.0, 10.0] {
        for format in PAGE_FORMATS {
            let job = RenderJob {
                bleed_mm: Some(bleed_mm),
                ..Default::default()
            };
            let geometry = compute_geometry(&job, resolve_preset(None), format);

            assert_eq!(geometry.total_width_mm, format.width_mm + 2.0 * bleed_mm);
            assert_eq!(geometry.total_height_mm, format.height_mm + 2.0 * bleed_mm);
        }
    }
}

#[test]
fn test_scale_factor_is_neutral_at_reference_dpi() {
    let job = RenderJob {
        dpi: Some(72),
        ..Default::default()
    };
    let geometry = compute_geometry(&job, resolve_preset(None), resolve_page_format(None));

    assert_eq!(geometry.scale_factor, 1.0);
}

#[test]
fn test_scale_factor_tracks_dpi() {
    for dpi in [72_u32, 96, 150, 300, 600] {
        let job = RenderJob {
            dpi: Some(dpi),
            ..Default::default()
        };
        let geometry = compute_geometry(&job, resolve_preset(None), resolve_page_format(None));

        assert_eq!(geometry.scale_factor, dpi as f32 / BASE_DPI as f32);
    }

    // 300 dpi is the 25/6 ratio the professional presets run at
    let job = RenderJob {
        dpi: Some(300),
        ..Default::default()
    };
    let geometry = compute_geometry(&job, resolve_preset(None), resolve_page_format(None));
    assert_eq!(geometry.scale_factor, 25.0 / 6.0);
}

#[test]
fn test_job_overrides_beat_preset_defaults() {
    let job = RenderJob {
        preset: Some("print-professional".to_string()),
        dpi: Some(150),
        bleed_mm: Some(1.0),
        crop_marks: Some(false),
        ..Default::default()
    };
    let preset = resolve_preset(job.preset.as_deref());
    let geometry = compute_geometry(&job, preset, resolve_page_format(None));

    assert_eq!(geometry.dpi, 150);
    assert_eq!(geometry.bleed_mm, 1.0);
    assert!(!geometry.crop_marks);
}

#[test]
fn test_professional_a4_geometry() {
    let job = RenderJob {
        preset: Some("print-professional".to_string()),
        page_format: Some("A4".to_string()),
        ..Default::default()
    };
    let preset = resolve_preset(job.preset.as_deref());
    let format = resolve_page_format(job.page_format.as_deref());
    let geometry = compute_geometry(&job, preset, format);

    assert_eq!(geometry.bleed_mm, 3.0);
    assert_eq!(geometry.total_width_mm, 216.0);
    assert_eq!(geometry.total_height_mm, 303.0);
    assert_eq!(geometry.dpi, 300);
    assert_eq!(geometry.scale_factor, 25.0 / 6.0);
    assert!(geometry.crop_marks);
}

#[test]
fn test_dl_with_bleed_override() {
    let job = RenderJob {
        page_format: Some("DL".to_string()),
        bleed_mm: Some(5.0),
        ..Default::default()
    };
    let format = resolve_page_format(job.page_format.as_deref());
    let geometry = compute_geometry(&job, resolve_preset(None), format);

    assert_eq!(geometry.total_width_mm, 109.0);
    assert_eq!(geometry.total_height_mm, 220.0);
}

#[test]
fn test_page_box_applies_orientation() {
    let job = RenderJob::default();
    let geometry = compute_geometry(&job, resolve_preset(None), resolve_page_format(None));

    assert_eq!(geometry.page_box(Orientation::Portrait), (210.0, 297.0));
    assert_eq!(geometry.page_box(Orientation::Landscape), (297.0, 210.0));
}

#[test]
fn test_orientation_derived_from_landscape_flag() {
    assert_eq!(RenderJob::default().orientation(), Orientation::Portrait);

    let job = RenderJob {
        landscape: true,
        ..Default::default()
    };
    assert_eq!(job.orientation(), Orientation::Landscape);
}
