use crate::pipeline::stage4_scene::{AxisTitle, ChartScene, Dot, Tick};
use crate::pipeline::stage5_interact::{
    DotAppearance, HoverTarget, Tooltip, dot_anchor, dot_appearances, tooltip_for,
};
use crate::report::{escape_html, fmt_num};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TOOLTIP_PAD_X: f64 = 14.0;
const TOOLTIP_PAD_Y: f64 = 10.0;

/// Draws a scene as a standalone SVG document. Point hover behaviour is
/// carried by CSS rules generated from the interaction states.
pub fn render_svg(scene: &ChartScene) -> String {
    let g = &scene.geometry;
    let c = &scene.colors;
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="lb-chart-svg" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet" style="width:100%;height:auto;display:block" font-family="system-ui, -apple-system, 'Segoe UI', sans-serif">"#,
        w = fmt_num(g.width),
        h = fmt_num(g.height),
    ));
    out.push('\n');
    out.push_str("<style>");
    out.push_str(&point_hover_css(scene));
    out.push_str("</style>\n");

    out.push_str(&format!(
        r#"<rect width="{}" height="{}" rx="12" fill="{}"/>"#,
        fmt_num(g.width),
        fmt_num(g.height),
        c.background
    ));
    out.push('\n');

    out.push_str(&format!(
        r#"<g transform="translate({},{})">"#,
        fmt_num(g.margin.left),
        fmt_num(g.margin.top)
    ));
    out.push('\n');
    push_grid(&mut out, scene);
    push_x_axis(&mut out, scene);
    push_y_axis(&mut out, scene);

    let resting = dot_appearances(scene, &HoverTarget::None);
    for (idx, (dot, look)) in scene.dots.iter().zip(resting.iter()).enumerate() {
        push_dot(&mut out, scene, idx, dot, look);
    }
    out.push_str("</g>\n");

    push_title(&mut out, scene, &scene.x_title);
    push_title(&mut out, scene, &scene.y_title);

    out.push_str(r#"<g class="tooltips">"#);
    out.push('\n');
    for idx in 0..scene.dots.len() {
        let hover = HoverTarget::Point(idx);
        let Some(anchor) = dot_anchor(scene, idx) else {
            continue;
        };
        if let Some(tip) = tooltip_for(scene, &hover, anchor) {
            push_tooltip(&mut out, scene, idx, &tip);
        }
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

fn point_hover_css(scene: &ChartScene) -> String {
    let g = &scene.geometry;
    let mut css = String::new();
    css.push_str(
        ".dot circle{cursor:pointer;transition:r .15s,fill-opacity .15s,stroke-opacity .15s}\
         .dot text{pointer-events:none;transition:opacity .15s}\
         .tooltip{visibility:hidden;pointer-events:none}",
    );
    let pointed = DotAppearance::pointed(g);
    css.push_str(&format!(
        ".dot:hover circle{{r:{}px;fill-opacity:{};stroke-opacity:{}}}",
        fmt_num(pointed.radius),
        fmt_num(pointed.fill_opacity),
        fmt_num(pointed.stroke_opacity)
    ));
    for idx in 0..scene.dots.len() {
        css.push_str(&format!(
            "svg:has(.dot[data-index=\"{idx}\"]:hover) .tooltip[data-index=\"{idx}\"]{{visibility:visible}}"
        ));
    }
    css
}

fn push_grid(out: &mut String, scene: &ChartScene) {
    let g = &scene.geometry;
    let grid = scene.colors.grid;
    out.push_str(r#"<g class="grid-y">"#);
    for t in &scene.y_ticks {
        out.push_str(&format!(
            r#"<line x1="0" x2="{}" y1="{p}" y2="{p}" stroke="{}" stroke-dasharray="3,3"/>"#,
            fmt_num(g.inner_width),
            grid,
            p = fmt_num(t.position),
        ));
    }
    out.push_str("</g>\n");
    out.push_str(r#"<g class="grid-x">"#);
    for t in &scene.x_ticks {
        out.push_str(&format!(
            r#"<line y1="0" y2="{}" x1="{p}" x2="{p}" stroke="{}" stroke-dasharray="3,3"/>"#,
            fmt_num(g.inner_height),
            grid,
            p = fmt_num(t.position),
        ));
    }
    out.push_str("</g>\n");
}

fn push_x_axis(out: &mut String, scene: &ChartScene) {
    let g = &scene.geometry;
    let text = scene.colors.text;
    out.push_str(&format!(
        r#"<g class="axis axis-x" transform="translate(0,{})">"#,
        fmt_num(g.inner_height)
    ));
    out.push_str(&format!(
        r#"<path class="domain" d="M0,{t}V0H{w}V{t}" fill="none" stroke="{text}" stroke-opacity="0.3"/>"#,
        t = fmt_num(TICK_SIZE),
        w = fmt_num(g.inner_width),
    ));
    for tick in &scene.x_ticks {
        push_tick(out, scene, tick, true);
    }
    out.push_str("</g>\n");
}

fn push_y_axis(out: &mut String, scene: &ChartScene) {
    let g = &scene.geometry;
    let text = scene.colors.text;
    out.push_str(r#"<g class="axis axis-y">"#);
    out.push_str(&format!(
        r#"<path class="domain" d="M-{t},{h}H0V0H-{t}" fill="none" stroke="{text}" stroke-opacity="0.3"/>"#,
        t = fmt_num(TICK_SIZE),
        h = fmt_num(g.inner_height),
    ));
    for tick in &scene.y_ticks {
        push_tick(out, scene, tick, false);
    }
    out.push_str("</g>\n");
}

fn push_tick(out: &mut String, scene: &ChartScene, tick: &Tick, horizontal: bool) {
    let text = scene.colors.text;
    let font = fmt_num(scene.geometry.tick_font);
    let offset = fmt_num(TICK_SIZE + TICK_PADDING);
    let label = escape_html(&tick.label);
    if horizontal {
        out.push_str(&format!(
            r#"<g class="tick" transform="translate({p},0)"><line y2="{t}" stroke="{text}" stroke-opacity="0.2"/><text y="{offset}" dy="0.71em" text-anchor="middle" fill="{text}" font-size="{font}px">{label}</text></g>"#,
            p = fmt_num(tick.position),
            t = fmt_num(TICK_SIZE),
        ));
    } else {
        out.push_str(&format!(
            r#"<g class="tick" transform="translate(0,{p})"><line x2="-{t}" stroke="{text}" stroke-opacity="0.2"/><text x="-{offset}" dy="0.32em" text-anchor="end" fill="{text}" font-size="{font}px">{label}</text></g>"#,
            p = fmt_num(tick.position),
            t = fmt_num(TICK_SIZE),
        ));
    }
}

fn push_dot(out: &mut String, scene: &ChartScene, idx: usize, dot: &Dot, look: &DotAppearance) {
    let g = &scene.geometry;
    out.push_str(&format!(
        r#"<g class="dot" data-index="{idx}" data-series="{series}" data-provider="{provider}" transform="translate({x},{y})">"#,
        series = dot.series,
        provider = escape_html(&dot.provider),
        x = fmt_num(dot.cx),
        y = fmt_num(dot.cy),
    ));
    out.push_str(&format!(
        r#"<circle r="{r}" fill="{color}" fill-opacity="{fo}" stroke="{color}" stroke-width="{sw}" stroke-opacity="{so}"/>"#,
        r = fmt_num(look.radius),
        color = dot.color,
        fo = fmt_num(look.fill_opacity),
        sw = fmt_num(g.stroke_width),
        so = fmt_num(look.stroke_opacity),
    ));
    out.push_str(&format!(
        r#"<text x="{x}" y="4" fill="{fill}" font-size="{font}px" font-weight="500" opacity="{op}">{label}</text>"#,
        x = fmt_num(g.dot_label_x),
        fill = scene.colors.text,
        font = fmt_num(g.dot_label_font),
        op = fmt_num(look.label_opacity),
        label = escape_html(&dot.label),
    ));
    out.push_str("</g>\n");
}

fn push_title(out: &mut String, scene: &ChartScene, title: &AxisTitle) {
    let transform = if title.rotated {
        r#" transform="rotate(-90)""#
    } else {
        ""
    };
    out.push_str(&format!(
        r#"<text{transform} x="{x}" y="{y}" text-anchor="middle" fill="{fill}" font-size="{font}px" font-weight="600">{text}</text>"#,
        x = fmt_num(title.x),
        y = fmt_num(title.y),
        fill = scene.colors.text,
        font = fmt_num(scene.geometry.axis_label_font),
        text = escape_html(title.text),
    ));
    out.push('\n');
}

fn push_tooltip(out: &mut String, scene: &ChartScene, idx: usize, tip: &Tooltip) {
    let g = &scene.geometry;
    let c = &scene.colors;
    let font = g.tooltip_font;
    let title_font = g.tooltip_title_font;
    let line_h = font * 1.5;

    let provider_line = format!("\u{25cf} {}", tip.provider);
    let widest = [
        tip.title.chars().count() as f64 * title_font,
        provider_line.chars().count() as f64 * font,
        tip.adversarial.chars().count() as f64 * font,
        tip.benign.chars().count() as f64 * font,
    ]
    .into_iter()
    .fold(0.0f64, f64::max);
    let box_w = widest * 0.6 + TOOLTIP_PAD_X * 2.0;
    let box_h = title_font * 1.5 + line_h * 3.0 + TOOLTIP_PAD_Y * 2.0;

    let x = tip.x.min(g.width - box_w).max(0.0);
    let y = tip.y.min(g.height - box_h).max(0.0);

    out.push_str(&format!(
        r#"<g class="tooltip" data-index="{idx}" transform="translate({},{})">"#,
        fmt_num(x),
        fmt_num(y)
    ));
    out.push_str(&format!(
        r#"<rect width="{}" height="{}" rx="8" fill="{}" stroke="{}"/>"#,
        fmt_num(box_w),
        fmt_num(box_h),
        c.tooltip_background,
        c.tooltip_border
    ));
    let left = fmt_num(TOOLTIP_PAD_X);
    let mut baseline = TOOLTIP_PAD_Y + title_font;
    out.push_str(&format!(
        r#"<text x="{left}" y="{}" fill="{}" font-size="{}px" font-weight="700">{}</text>"#,
        fmt_num(baseline),
        c.text,
        fmt_num(title_font),
        escape_html(&tip.title)
    ));
    baseline += line_h;
    out.push_str(&format!(
        r#"<text x="{left}" y="{}" fill="{}" font-size="{}px">{}</text>"#,
        fmt_num(baseline),
        tip.provider_color,
        fmt_num(font),
        escape_html(&provider_line)
    ));
    for line in [&tip.adversarial, &tip.benign] {
        baseline += line_h;
        out.push_str(&format!(
            r#"<text x="{left}" y="{}" fill="{}" font-size="{}px">{}</text>"#,
            fmt_num(baseline),
            c.text,
            fmt_num(font),
            escape_html(line)
        ));
    }
    out.push_str("</g>\n");
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
