// ABOUTME: Fixed four-step production chain and file name patterns
// ABOUTME: Carries the literal cmsDriver command template for each step

/// GEN config file name pattern, rendered per scan point.
pub const CFG_FILE_PATTERN: &str = "DisplacedSUSY_squarkToQuarkChi_MSquark_${MSQUARK}_MChi_${MCHI}_ctau_${CTAU}mm_TuneCP5_14TeV_pythia8_cff.py";

/// GEN ROOT output file name pattern, referenced by the first step.
pub const GEN_ROOT_FILE_PATTERN: &str = "EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_${MSQUARK}_MChi_${MCHI}_ctau_${CTAU}mm_TuneCP5_14TeV_pythia8_GEN.root";

/// Per-step config file name pattern (${STEP} filled in per step).
pub const STEP_CFG_FILE_PATTERN: &str = "DisplacedSUSY_squarkToQuarkChi_MSquark_${MSQUARK}_MChi_${MCHI}_ctau_${CTAU}mm_TuneCP5_14TeV_pythia8_cff_${STEP}.py";

/// Per-step ROOT output file name pattern.
pub const STEP_ROOT_FILE_PATTERN: &str = "EXO-DisplacedSUSY_squarkToQuarkChi_MSquark_${MSQUARK}_MChi_${MCHI}_ctau_${CTAU}mm_TuneCP5_14TeV_pythia8_${STEP}.root";

/// Running-commands file name pattern, rendered per scan point.
pub const COMMANDS_FILE_PATTERN: &str = "DisplacedSUSY_squarkToQuarkChi_MSquark_${MSQUARK}_MChi_${MCHI}_ctau_${CTAU}mm_TuneCP5_14TeV_pythia8_running_commands.txt";

const PRPREMIX_STEP1_COMMAND: &str = r#"cmsDriver.py step1 --filein file:${GEN_ROOT_NAME} --fileout file:${PRPremix_Step1_ROOT_NAME}  --pileup_input "dbs:/Neutrino_E-10_gun/RunIISummer17PrePremix-MCv2_correctPU_94X_mc2017_realistic_v9-v1/GEN-SIM-DIGI-RAW" --mc --eventcontent PREMIXRAW --datatier GEN-SIM-RAW --conditions 94X_mc2017_realistic_v11 --step DIGIPREMIX_S2,DATAMIX,L1,DIGI2RAW,HLT:2e34v40 --nThreads 8 --datamix PreMix --era Run2_2017 --python_filename ${PRPremix_Step1_CFG_NAME} --no_exec --customise Configuration/DataProcessing/Utils.addMonitoring -n 1751 || exit $? ;"#;

const PRPREMIX_COMMAND: &str = r#"cmsDriver.py step2 --filein file:${PRPremix_Step1_ROOT_NAME} --fileout file:${PRPremix_ROOT_NAME} --mc --eventcontent AODSIM --runUnscheduled --datatier AODSIM --conditions 94X_mc2017_realistic_v11 --step RAW2DIGI,RECO,RECOSIM,EI --nThreads 8 --era Run2_2017 --python_filename ${PRPremix_CFG_NAME} --no_exec --customise Configuration/DataProcessing/Utils.addMonitoring -n 1751 || exit $? ;"#;

const MINIAOD_COMMAND: &str = r#"cmsDriver.py step1 --filein file:${PRPremix_ROOT_NAME} --fileout file:${miniAOD_ROOT_NAME} --mc --eventcontent MINIAODSIM --runUnscheduled --datatier MINIAODSIM --conditions 94X_mc2017_realistic_v14 --step PAT --nThreads 4 --scenario pp --era Run2_2017,run2_miniAOD_94XFall17 --python_filename ${miniAOD_CFG_NAME} --no_exec --customise Configuration/DataProcessing/Utils.addMonitoring -n 4800 || exit $? ;"#;

const NANOAOD_COMMAND: &str = r#"cmsDriver.py step1 --filein file:${miniAOD_ROOT_NAME} --fileout file:${nanoAOD_ROOT_NAME} --mc --eventcontent NANOEDMAODSIM --datatier NANOAODSIM --conditions 94X_mc2017_realistic_v14 --step NANO --nThreads 2 --era Run2_2017,run2_nanoAOD_94XMiniAODv2 --python_filename ${nanoAOD_CFG_NAME} --no_exec --customise Configuration/DataProcessing/Utils.addMonitoring -n 10000 || exit $? ;"#;

/// One of the four fixed processing steps, in chain order. Each step's
/// command reads the previous step's ROOT output and writes its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PrPremixStep1,
    PrPremix,
    MiniAod,
    NanoAod,
}

impl Step {
    /// The fixed processing order of the command chain.
    pub const ORDER: [Step; 4] = [
        Step::PrPremixStep1,
        Step::PrPremix,
        Step::MiniAod,
        Step::NanoAod,
    ];

    /// Step identifier as it appears in file names and placeholder keys
    pub fn id(&self) -> &'static str {
        match self {
            Step::PrPremixStep1 => "PRPremix_Step1",
            Step::PrPremix => "PRPremix",
            Step::MiniAod => "miniAOD",
            Step::NanoAod => "nanoAOD",
        }
    }

    /// Literal shell command template for this step
    pub fn command_template(&self) -> &'static str {
        match self {
            Step::PrPremixStep1 => PRPREMIX_STEP1_COMMAND,
            Step::PrPremix => PRPREMIX_COMMAND,
            Step::MiniAod => MINIAOD_COMMAND,
            Step::NanoAod => NANOAOD_COMMAND,
        }
    }
}
