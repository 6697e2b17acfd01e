//! Slide Report Module
//! Writes a PowerPoint deck with one slide per dashboard view (title, chart
//! image, insights) followed by a recommendations slide.
//!
//! The package is assembled directly as ZIP/XML parts.

use crate::charts::StaticChartRenderer;
use crate::data::{InsightKind, DASHBOARD_TITLE, FINAL_RECOMMENDATIONS};
use crate::dispatch::ViewDispatcher;
use crate::error::Result;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

/// EMU (English Metric Units) conversion: 914400 EMU = 1 inch
const EMU_PER_INCH: i64 = 914400;
/// 16:9 slide, 10 x 5.625 inches
const SLIDE_WIDTH: i64 = 9144000;
const SLIDE_HEIGHT: i64 = 5143500;

const MARGIN: i64 = EMU_PER_INCH / 3;
const TITLE_HEIGHT: i64 = EMU_PER_INCH * 2 / 3;

/// Encoded chart picture with its pixel size.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SlideImage {
    /// Picture extent in EMU for a frame `max_width` wide and at most
    /// `max_height` tall, keeping the pixel aspect ratio.
    pub fn extent(&self, max_width: i64, max_height: i64) -> (i64, i64) {
        if self.width == 0 || self.height == 0 {
            return (max_width, max_height);
        }
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let height = max_width * h / w;
        if height <= max_height {
            (max_width, height)
        } else {
            (max_height * w / h, max_height)
        }
    }
}

/// Content of one slide.
#[derive(Debug, Clone)]
pub struct ReportSlide {
    pub title: String,
    /// Text-only slide when `None`
    pub image: Option<SlideImage>,
    pub bullets: Vec<String>,
}

/// Escape text for XML element content and attributes.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct ReportGenerator;

impl ReportGenerator {
    /// Render every view and assemble the slide list.
    pub fn build_slides(dispatcher: &ViewDispatcher, width: u32, height: u32) -> Result<Vec<ReportSlide>> {
        let images = StaticChartRenderer::render_all(dispatcher, width, height)?;

        let mut slides: Vec<ReportSlide> = images
            .into_iter()
            .map(|(view, png)| {
                let triple = dispatcher.resolve(view);
                let bullets = triple
                    .insights
                    .lines
                    .iter()
                    .map(|insight| match insight.kind {
                        InsightKind::Strength => insight.text.to_string(),
                        InsightKind::ActionPoint => format!("⚠ {}", insight.text),
                    })
                    .collect();
                ReportSlide {
                    title: triple.title.to_string(),
                    image: Some(SlideImage { png, width, height }),
                    bullets,
                }
            })
            .collect();

        let mut bullets: Vec<String> = FINAL_RECOMMENDATIONS
            .strengths
            .iter()
            .map(|s| format!("Strength: {}", s))
            .collect();
        bullets.extend(
            FINAL_RECOMMENDATIONS
                .improvements
                .iter()
                .map(|s| format!("Improve: {}", s)),
        );
        slides.push(ReportSlide {
            title: "Final Recommendations".to_string(),
            image: None,
            bullets,
        });

        Ok(slides)
    }

    /// Render all views and write the deck to `output_path`.
    pub fn export_report(dispatcher: &ViewDispatcher, output_path: &Path, width: u32, height: u32) -> Result<usize> {
        let slides = Self::build_slides(dispatcher, width, height)?;
        let file = File::create(output_path)?;
        Self::write_pptx(file, &slides, DASHBOARD_TITLE)?;
        log::info!(
            "Report generated: {} ({} slides)",
            output_path.display(),
            slides.len()
        );
        Ok(slides.len())
    }

    /// Write a deck to any seekable sink.
    pub fn write_pptx<W: Write + Seek>(writer: W, slides: &[ReportSlide], title: &str) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default();

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(Self::content_types_xml(slides.len()).as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(Self::rels_xml().as_bytes())?;

        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
        zip.write_all(Self::presentation_rels_xml(slides.len()).as_bytes())?;

        zip.start_file("ppt/presentation.xml", options)?;
        zip.write_all(Self::presentation_xml(slides.len()).as_bytes())?;

        let mut image_idx = 0;
        for (idx, slide) in slides.iter().enumerate() {
            let slide_num = idx + 1;
            let image_id = slide.image.as_ref().map(|_| {
                image_idx += 1;
                image_idx
            });

            zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", slide_num), options)?;
            zip.write_all(Self::slide_rels_xml(image_id).as_bytes())?;

            zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;
            zip.write_all(Self::slide_xml(slide).as_bytes())?;

            if let (Some(id), Some(image)) = (image_id, slide.image.as_ref()) {
                zip.start_file(format!("ppt/media/image{}.png", id), options)?;
                zip.write_all(&image.png)?;
            }
        }

        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
        zip.write_all(Self::slide_layout_xml().as_bytes())?;
        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        zip.write_all(Self::layout_rels_xml().as_bytes())?;

        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
        zip.write_all(Self::slide_master_xml().as_bytes())?;
        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
        zip.write_all(Self::master_rels_xml().as_bytes())?;

        zip.start_file("ppt/theme/theme1.xml", options)?;
        zip.write_all(Self::theme_xml().as_bytes())?;

        zip.start_file("docProps/core.xml", options)?;
        zip.write_all(Self::core_props_xml(title).as_bytes())?;
        zip.start_file("docProps/app.xml", options)?;
        zip.write_all(Self::app_props_xml(slides.len()).as_bytes())?;

        zip.finish()?;
        Ok(())
    }

    fn content_types_xml(slide_count: usize) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Default Extension="png" ContentType="image/png"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
        );
        for i in 1..=slide_count {
            xml.push_str(&format!(
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                i
            ));
            xml.push('\n');
        }
        xml.push_str("</Types>");
        xml
    }

    fn rels_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    }

    fn presentation_rels_xml(slide_count: usize) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>
"#,
        );
        for i in 1..=slide_count {
            xml.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                i + 2,
                i
            ));
            xml.push('\n');
        }
        xml.push_str("</Relationships>");
        xml
    }

    fn presentation_xml(slide_count: usize) -> String {
        let slide_ids: String = (1..=slide_count)
            .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i + 2))
            .collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{}</p:sldIdLst>
<p:sldSz cx="{}" cy="{}"/>
<p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
            slide_ids, SLIDE_WIDTH, SLIDE_HEIGHT, SLIDE_HEIGHT, SLIDE_WIDTH
        )
    }

    fn slide_rels_xml(image_id: Option<usize>) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
"#,
        );
        if let Some(id) = image_id {
            xml.push_str(&format!(
                r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image{}.png"/>"#,
                id
            ));
            xml.push('\n');
        }
        xml.push_str("</Relationships>");
        xml
    }

    /// Text box shape with one paragraph per entry.
    fn text_box(id: usize, name: &str, frame: (i64, i64, i64, i64), paragraphs: &[String], size: u32, bold: bool) -> String {
        let (x, y, w, h) = frame;
        let b = if bold { r#" b="1""# } else { "" };
        let body: String = paragraphs
            .iter()
            .map(|p| {
                format!(
                    r#"<a:p><a:r><a:rPr lang="en-GB" sz="{}"{} dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                    size * 100,
                    b,
                    xml_escape(p)
                )
            })
            .collect();
        format!(
            r#"
<p:sp>
<p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>
<p:txBody><a:bodyPr wrap="square"><a:normAutofit/></a:bodyPr><a:lstStyle/>{}</p:txBody>
</p:sp>"#,
            id, name, x, y, w, h, body
        )
    }

    fn slide_xml(slide: &ReportSlide) -> String {
        let content_top = MARGIN + TITLE_HEIGHT;
        let content_height = SLIDE_HEIGHT - content_top - MARGIN;
        let content_width = SLIDE_WIDTH - 2 * MARGIN;

        let mut shapes = Self::text_box(
            2,
            "Title",
            (MARGIN, MARGIN, content_width, TITLE_HEIGHT),
            std::slice::from_ref(&slide.title),
            24,
            true,
        );

        if let Some(image) = &slide.image {
            // Chart on the left two thirds, insights on the right
            let frame_width = content_width * 2 / 3;
            let (image_width, image_height) = image.extent(frame_width, content_height);
            let text_x = MARGIN + frame_width + MARGIN / 2;
            let text_width = SLIDE_WIDTH - text_x - MARGIN;
            shapes.push_str(&format!(
                r#"
<p:pic>
<p:nvPicPr><p:cNvPr id="3" name="Chart"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>
<p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
</p:pic>"#,
                MARGIN,
                content_top,
                image_width,
                image_height
            ));
            shapes.push_str(&Self::text_box(
                4,
                "Insights",
                (text_x, content_top, text_width, content_height),
                &slide.bullets,
                12,
                false,
            ));
        } else {
            shapes.push_str(&Self::text_box(
                3,
                "Body",
                (MARGIN, content_top, content_width, content_height),
                &slide.bullets,
                14,
                false,
            ));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
{}
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            shapes
        )
    }

    fn slide_layout_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">
<p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    }

    fn layout_rels_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    }

    fn slide_master_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>"#
    }

    fn master_rels_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#
    }

    /// Dashboard palette as the deck theme.
    fn theme_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Dashboard">
<a:themeElements>
<a:clrScheme name="Dashboard"><a:dk1><a:srgbClr val="1F2937"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1E40AF"/></a:dk2><a:lt2><a:srgbClr val="EFF6FF"/></a:lt2><a:accent1><a:srgbClr val="3B82F6"/></a:accent1><a:accent2><a:srgbClr val="60A5FA"/></a:accent2><a:accent3><a:srgbClr val="6B7280"/></a:accent3><a:accent4><a:srgbClr val="10B981"/></a:accent4><a:accent5><a:srgbClr val="8B5CF6"/></a:accent5><a:accent6><a:srgbClr val="B45309"/></a:accent6><a:hlink><a:srgbClr val="2563EB"/></a:hlink><a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink></a:clrScheme>
<a:fontScheme name="Dashboard"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme>
<a:fmtScheme name="Dashboard">
<a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst>
<a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>
<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>
<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>"#
    }

    fn core_props_xml(title: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:title>{}</dc:title>
<dc:creator>Academic Dashboard</dc:creator>
<cp:revision>1</cp:revision>
</cp:coreProperties>"#,
            xml_escape(title)
        )
    }

    fn app_props_xml(slide_count: usize) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
<Application>Academic Dashboard</Application>
<PresentationFormat>On-screen Show (16:9)</PresentationFormat>
<Slides>{}</Slides>
</Properties>"#,
            slide_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn sample_slides() -> Vec<ReportSlide> {
        vec![
            ReportSlide {
                title: "Reading Ability Comparison".to_string(),
                image: Some(SlideImage {
                    png: vec![0x89, b'P', b'N', b'G'],
                    width: 1200,
                    height: 800,
                }),
                bullets: vec!["Reading & maths gaps close".to_string()],
            },
            ReportSlide {
                title: "Final Recommendations".to_string(),
                image: None,
                bullets: vec!["Strength: <none>".to_string()],
            },
        ]
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(xml_escape(r#"a & <b> "c" 'd'"#), "a &amp; &lt;b&gt; &quot;c&quot; &apos;d&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn package_has_one_part_per_slide() {
        let mut buffer = Cursor::new(Vec::new());
        ReportGenerator::write_pptx(&mut buffer, &sample_slides(), "Deck & Title").unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        let names: Vec<String> = archive.file_names().map(|s| s.to_string()).collect();
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide2.xml".to_string()));
        assert!(names.contains(&"ppt/media/image1.png".to_string()));
        assert!(!names.contains(&"ppt/media/image2.png".to_string()));

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert!(slide.contains("Reading &amp; maths gaps close"));
        assert!(slide.contains(r#"r:embed="rId2""#));

        let mut rels = String::new();
        archive
            .by_name("ppt/slides/_rels/slide2.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(!rels.contains("image"));

        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("Deck &amp; Title"));
    }

    #[test]
    fn picture_keeps_image_aspect_ratio() {
        let wide = SlideImage { png: Vec::new(), width: 1600, height: 800 };
        assert_eq!(wide.extent(6_000_000, 4_000_000), (6_000_000, 3_000_000));

        // Too tall for the frame: height-bound instead
        let tall = SlideImage { png: Vec::new(), width: 800, height: 1600 };
        assert_eq!(tall.extent(6_000_000, 4_000_000), (2_000_000, 4_000_000));

        let mut slide = sample_slides().remove(0);
        slide.image = Some(wide);
        let xml = ReportGenerator::slide_xml(&slide);
        let content_width = SLIDE_WIDTH - 2 * MARGIN;
        let frame_width = content_width * 2 / 3;
        assert!(xml.contains(&format!(r#"<a:ext cx="{}" cy="{}"/>"#, frame_width, frame_width / 2)));
    }

    #[test]
    fn content_types_list_every_slide() {
        let xml = ReportGenerator::content_types_xml(7);
        assert_eq!(xml.matches("/ppt/slides/slide").count(), 7);
    }
}
