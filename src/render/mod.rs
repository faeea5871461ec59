// ABOUTME: Renders config files and command lists from scan point contexts
// ABOUTME: Produces deterministic path/content pairs, no I/O of its own

pub mod steps;

use std::path::{Path, PathBuf};

use crate::template::{scrub_decimal_zeros, PlaceholderEngine, TemplateContext};
pub use steps::Step;
use steps::{
    CFG_FILE_PATTERN, COMMANDS_FILE_PATTERN, GEN_ROOT_FILE_PATTERN, STEP_CFG_FILE_PATTERN,
    STEP_ROOT_FILE_PATTERN,
};

/// Placeholder key for the GEN ROOT file, referenced by the first step's
/// command and injected while rendering the config file.
pub const GEN_ROOT_KEY: &str = "GEN_ROOT_NAME";

/// Output directory layout for rendered files.
#[derive(Debug, Clone)]
pub struct RenderLayout {
    /// Directory receiving rendered config files
    pub cfg_dir: PathBuf,
    /// Directory receiving running-commands files
    pub commands_dir: PathBuf,
    /// Directory the generation step writes its ROOT files to, relative
    /// to where the commands will run
    pub root_dir: PathBuf,
}

/// A rendered output file: destination path plus full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Renders one config file and one command list per scan point context.
#[derive(Debug, Clone)]
pub struct Renderer {
    engine: PlaceholderEngine,
    layout: RenderLayout,
}

impl Renderer {
    pub fn new(layout: RenderLayout) -> Self {
        Self {
            engine: PlaceholderEngine::new(),
            layout,
        }
    }

    /// Render the configuration file for one scan point.
    ///
    /// Builds the config path and GEN ROOT file name from the fixed
    /// patterns, records the ROOT name in the context for the command
    /// chain, then substitutes the config template body.
    pub fn render_config(&self, ctx: &mut TemplateContext, template_text: &str) -> RenderedFile {
        let path = self.render_path(&self.layout.cfg_dir, CFG_FILE_PATTERN, ctx);
        let root_path = self.render_path(&self.layout.root_dir, GEN_ROOT_FILE_PATTERN, ctx);
        ctx.set(GEN_ROOT_KEY, root_path.to_string_lossy());

        let content = self.engine.substitute(template_text, ctx);

        RenderedFile { path, content }
    }

    /// Render the running-commands file for one scan point.
    ///
    /// Injects each step's config and ROOT file names into the context,
    /// then renders the four command templates in chain order, each
    /// followed by a blank line.
    pub fn render_commands(&self, ctx: &mut TemplateContext) -> RenderedFile {
        for step in Step::ORDER {
            ctx.set("STEP", step.id());
            let cfg_name = self.render_name(STEP_CFG_FILE_PATTERN, ctx);
            let root_name = self.render_name(STEP_ROOT_FILE_PATTERN, ctx);
            ctx.set(format!("{}_CFG_NAME", step.id()), cfg_name);
            ctx.set(format!("{}_ROOT_NAME", step.id()), root_name);
        }

        let mut content = String::new();
        for step in Step::ORDER {
            content.push_str(&self.engine.substitute(step.command_template(), ctx));
            content.push_str("\n\n");
        }

        let path = self.render_path(&self.layout.commands_dir, COMMANDS_FILE_PATTERN, ctx);

        RenderedFile { path, content }
    }

    /// Substitute a bare file name pattern and scrub ".0" from the result
    fn render_name(&self, pattern: &str, ctx: &TemplateContext) -> String {
        scrub_decimal_zeros(&self.engine.substitute(pattern, ctx))
    }

    /// Substitute a file name pattern under `dir`, scrubbing ".0" from the
    /// whole rendered path string
    fn render_path(&self, dir: &Path, pattern: &str, ctx: &TemplateContext) -> PathBuf {
        let rendered = format!("{}/{}", dir.display(), self.engine.substitute(pattern, ctx));
        PathBuf::from(scrub_decimal_zeros(&rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanPoint;
    use indexmap::IndexMap;

    fn test_layout() -> RenderLayout {
        RenderLayout {
            cfg_dir: PathBuf::from("GEN_cff_files"),
            commands_dir: PathBuf::from("RunningCommands"),
            root_dir: PathBuf::from("../GEN_root_files"),
        }
    }

    fn test_context() -> TemplateContext {
        let mut raw = IndexMap::new();
        raw.insert("MSQUARK".to_string(), 350.0);
        raw.insert("MCHI".to_string(), 148.0);
        raw.insert("CTAU".to_string(), 10.0);
        TemplateContext::from_point(&ScanPoint::from_raw(raw))
    }

    #[test]
    fn test_render_config_path_scrubbed() {
        let renderer = Renderer::new(test_layout());
        let mut ctx = test_context();

        let rendered = renderer.render_config(&mut ctx, "dummy");
        assert_eq!(
            rendered.path,
            PathBuf::from(
                "GEN_cff_files/DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_cff.py"
            )
        );
    }

    #[test]
    fn test_render_config_substitutes_body() {
        let renderer = Renderer::new(test_layout());
        let mut ctx = test_context();

        let template = "SQUARK_MASS = ${MSQUARK}\nWIDTH = ${WIDTH}\nOUTPUT = '${GEN_ROOT_NAME}'\n";
        let rendered = renderer.render_config(&mut ctx, template);

        assert!(rendered.content.contains("SQUARK_MASS = 350.0"));
        assert!(!rendered.content.contains("${WIDTH}"));
        assert!(rendered
            .content
            .contains("OUTPUT = '../GEN_root_files/EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_GEN.root'"));
    }

    #[test]
    fn test_render_config_leaves_unknown_placeholders() {
        let renderer = Renderer::new(test_layout());
        let mut ctx = test_context();

        let rendered = renderer.render_config(&mut ctx, "value = ${NOT_A_FIELD}");
        assert_eq!(rendered.content, "value = ${NOT_A_FIELD}");
    }

    #[test]
    fn test_render_commands_chains_steps() {
        let renderer = Renderer::new(test_layout());
        let mut ctx = test_context();

        renderer.render_config(&mut ctx, "");
        let rendered = renderer.render_commands(&mut ctx);

        assert_eq!(
            rendered.path,
            PathBuf::from(
                "RunningCommands/DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_running_commands.txt"
            )
        );

        // Four commands, each terminated by a blank line
        let commands: Vec<&str> = rendered.content.trim_end().split("\n\n").collect();
        assert_eq!(commands.len(), 4);

        // Step 1 reads the GEN ROOT file recorded during config rendering
        assert!(commands[0].contains(
            "--filein file:../GEN_root_files/EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_GEN.root"
        ));

        // Each later step reads the previous step's output
        assert!(commands[1].contains("--filein file:EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_PRPremix_Step1.root"));
        assert!(commands[2].contains("--filein file:EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_PRPremix.root"));
        assert!(commands[3].contains("--filein file:EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_350_MChi_148_ctau_10mm_TuneCP5_14TeV_pythia8_miniAOD.root"));

        // No placeholders left behind in the step wiring
        assert!(!rendered.content.contains("_ROOT_NAME}"));
        assert!(!rendered.content.contains("_CFG_NAME}"));
        // The shell exit check is not a placeholder and must survive
        assert!(rendered.content.contains("|| exit $? ;"));
    }

    #[test]
    fn test_rendered_outputs_unique_per_point() {
        let renderer = Renderer::new(test_layout());

        let mut raw = IndexMap::new();
        raw.insert("MSQUARK".to_string(), 1000.0);
        raw.insert("MCHI".to_string(), 148.0);
        raw.insert("CTAU".to_string(), 100.0);
        let mut other = TemplateContext::from_point(&ScanPoint::from_raw(raw));
        let mut first = test_context();

        let a = renderer.render_config(&mut first, "");
        let b = renderer.render_config(&mut other, "");
        assert_ne!(a.path, b.path);
    }
}
