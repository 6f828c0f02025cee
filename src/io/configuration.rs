//! Analysis thresholds and runtime configuration defaults

// Image metrics
/// Golden ratio, used for aspect detection and modular scales
pub const GOLDEN_RATIO: f64 = 1.618_033_988_75;
/// Allowed deviation from the golden ratio or its inverse
pub const GOLDEN_RATIO_TOLERANCE: f64 = 0.1;
/// Grayscale values above this count as whitespace
pub const WHITESPACE_LIGHT_THRESHOLD: u8 = 240;
/// Grayscale values below this count as whitespace
pub const WHITESPACE_DARK_THRESHOLD: u8 = 15;
/// Grayscale values below this are foreground for box counting
pub const FRACTAL_FOREGROUND_THRESHOLD: u8 = 128;
/// Smallest box edge used when counting occupied boxes
pub const FRACTAL_MIN_BOX_SIZE: usize = 4;

// Per-image tag inference, whitespace in percent
/// Whitespace above this suggests light typography and a minimalist mood
pub const TAG_AIRY_WHITESPACE_PERCENT: f64 = 70.0;
/// Whitespace below this suggests bold typography and a dense mood
pub const TAG_CROWDED_WHITESPACE_PERCENT: f64 = 30.0;
/// Below this whitespace a bold/light conflict keeps bold, otherwise light
pub const TAG_WEIGHT_TIEBREAK_WHITESPACE_PERCENT: f64 = 50.0;
/// Both symmetries above this suggest geometric typography
pub const TAG_GEOMETRIC_SYMMETRY: f64 = 0.85;
/// Either symmetry below this suggests expressive typography
pub const TAG_EXPRESSIVE_SYMMETRY: f64 = 0.5;
/// Mean saturation above this suggests display typography
pub const TAG_DISPLAY_SATURATION: f64 = 0.6;
/// Mean saturation below this suggests serif typography
pub const TAG_SERIF_SATURATION: f64 = 0.2;
/// Saturation splitting energetic from warm, and vibrant from calm
pub const TAG_INTENSE_HUE_SATURATION: f64 = 0.5;
/// Mean saturation above this suggests a vibrant mood
pub const TAG_VIBRANT_SATURATION: f64 = 0.7;
/// Mean saturation below this suggests a muted mood
pub const TAG_MUTED_SATURATION: f64 = 0.3;
/// Average symmetry above this suggests balanced, professional moods
pub const TAG_BALANCED_SYMMETRY: f64 = 0.8;
/// Average symmetry below this suggests dynamic, creative moods
pub const TAG_DYNAMIC_SYMMETRY: f64 = 0.5;

// Batch feature bands, whitespace as a fraction
/// Fractal dimension above this marks a visually complex batch
pub const COMPLEX_FRACTAL_DIMENSION: f64 = 1.7;
/// Fractal dimension below this marks a visually simple batch
pub const SIMPLE_FRACTAL_DIMENSION: f64 = 1.3;
/// Entropy above this marks a busy batch
pub const BUSY_ENTROPY: f64 = 6.5;
/// Entropy below this marks a simple batch
pub const SIMPLE_ENTROPY: f64 = 3.0;
/// Entropy above this marks a textured batch
pub const TEXTURED_ENTROPY: f64 = 6.0;
/// Entropy above this marks a chaotic batch
pub const CHAOTIC_ENTROPY: f64 = 7.0;
/// Entropy above which dense grids gain a column
pub const WIDE_GRID_ENTROPY: f64 = 5.0;
/// Aesthetic score at or above this is high
pub const HIGH_AESTHETIC_SCORE: f64 = 8.0;
/// Aesthetic score at or above this is good
pub const GOOD_AESTHETIC_SCORE: f64 = 7.0;
/// Aesthetic score at or below this is low
pub const LOW_AESTHETIC_SCORE: f64 = 4.0;
/// Whitespace above this infers a minimalist layout preference
pub const SPACIOUS_WHITESPACE: f64 = 0.75;
/// Whitespace below this infers a bold layout preference
pub const PACKED_WHITESPACE: f64 = 0.25;
/// Whitespace above this reads as airy
pub const AIRY_WHITESPACE: f64 = 0.7;
/// Whitespace below this reads as crowded
pub const CROWDED_WHITESPACE: f64 = 0.3;
/// Whitespace above this loosens line height
pub const ROOMY_WHITESPACE: f64 = 0.6;
/// Whitespace below this tightens line height and favours readable fonts
pub const TIGHT_WHITESPACE: f64 = 0.4;
/// Both symmetries above this, with structured balance, infer structure
pub const STRUCTURED_SYMMETRY: f64 = 0.85;
/// Visual balance above this, with structured symmetry, infers structure
pub const STRUCTURED_BALANCE: f64 = 0.9;
/// Both symmetries above this read as symmetric
pub const SYMMETRIC_THRESHOLD: f64 = 0.8;
/// Visual balance above this reads as centred
pub const CENTRED_BALANCE: f64 = 0.8;
/// Both symmetries above this favour structured font pairings
pub const ORDERLY_SYMMETRY: f64 = 0.7;
/// Either symmetry below this reads as asymmetric
pub const ASYMMETRIC_SYMMETRY: f64 = 0.6;

// Palette extraction
/// Number of clusters requested from k-means
pub const PALETTE_CLUSTER_COUNT: usize = 5;
/// Longest edge of the thumbnail sampled for colours
pub const PALETTE_THUMBNAIL_EDGE: u32 = 200;
/// Independent k-means restarts; the lowest inertia run wins
pub const KMEANS_RESTARTS: usize = 10;
/// Iteration cap for a single k-means run
pub const KMEANS_MAX_ITERATIONS: usize = 100;
/// Fixed seed so palette extraction is reproducible
pub const DEFAULT_SEED: u64 = 42;

// Palette adjustments
/// Channel shifts for primary, secondary and accent in dark mode
pub const DARK_MODE_SHIFTS: [i16; 3] = [-50, -30, 50];
/// Channel shifts for primary, secondary and accent in light mode
pub const LIGHT_MODE_SHIFTS: [i16; 3] = [20, 10, -20];
/// Saturation multiplier for the muted style
pub const MUTED_SATURATION_FACTOR: f64 = 0.7;
/// Lightness multiplier for the pastel style
pub const PASTEL_LIGHTNESS_FACTOR: f64 = 1.2;
/// Saturation multiplier for the pastel style
pub const PASTEL_SATURATION_FACTOR: f64 = 0.8;
/// Primary luminance above which body text is black rather than white
pub const DARK_TEXT_LUMINANCE: f64 = 0.5;

// Colour harmony, hues in degrees
/// Hue spread below which a palette is monochromatic
pub const HARMONY_MONOCHROMATIC_SPREAD: f64 = 15.0;
/// Largest gap between neighbouring hues in an analogous palette
pub const HARMONY_ANALOGOUS_MAX_GAP: f64 = 60.0;
/// Allowed deviation from exact complementary or triadic angles
pub const HARMONY_HUE_TOLERANCE: f64 = 15.0;
/// Floor applied when no harmony rule fires
pub const HARMONY_FALLBACK_SCORE: f64 = 3.0;

// Accessibility
/// Maximum lightness adjustments attempted when suggesting a colour
pub const CONTRAST_ADJUST_ATTEMPTS: usize = 20;
/// Lightness change applied per adjustment
pub const CONTRAST_ADJUST_STEP: f64 = 0.05;

// Typography and layout
/// Base font size before feature adjustments, in pixels
pub const BASE_FONT_SIZE: f64 = 16.0;
/// Base spacing unit before feature adjustments, in pixels
pub const BASE_SPACING_UNIT: f64 = 16.0;
/// Body size gained per unit of whitespace fraction, in pixels
pub const FONT_SIZE_PER_WHITESPACE: f64 = 6.0;
/// Body size gained per aesthetic score point, in pixels
pub const FONT_SIZE_PER_AESTHETIC_POINT: f64 = 0.4;
/// Body size multiplier for simple batches
pub const SIMPLE_FONT_SIZE_FACTOR: f64 = 1.05;
/// Body size multiplier for busy batches
pub const BUSY_FONT_SIZE_FACTOR: f64 = 0.95;
/// Scale ratio nudge for high or low aesthetic scores
pub const SCALE_RATIO_AESTHETIC_NUDGE: f64 = 0.07;
/// Scale ratio gained per unit of whitespace fraction
pub const SCALE_RATIO_PER_WHITESPACE: f64 = 0.03;
/// Scale ratio multiplier for busy batches
pub const BUSY_SCALE_RATIO_FACTOR: f64 = 0.98;
/// Scale ratio multiplier for simple batches
pub const SIMPLE_SCALE_RATIO_FACTOR: f64 = 1.02;
/// Spacing gained per unit of whitespace fraction, in pixels
pub const SPACING_PER_WHITESPACE: f64 = 20.0;
/// Spacing gained per unit of visual balance, in pixels
pub const SPACING_PER_BALANCE: f64 = 10.0;
/// Spacing multiplier for busy batches
pub const BUSY_SPACING_FACTOR: f64 = 0.9;
/// Spacing multiplier for simple batches
pub const SIMPLE_SPACING_FACTOR: f64 = 1.1;
/// Body readability above this earns a bonus when whitespace is tight
pub const READABLE_BODY_FONT: f64 = 0.8;
/// Heading font used when no pairing can be chosen
pub const DEFAULT_HEADING_FONT: &str = "Roboto";
/// Body font used when no pairing can be chosen
pub const DEFAULT_BODY_FONT: &str = "Open Sans";

// Aggregation defaults when no image produced a value
/// Default whitespace percentage
pub const DEFAULT_WHITESPACE_PERCENTAGE: f64 = 50.0;
/// Default symmetry score for either axis
pub const DEFAULT_SYMMETRY: f64 = 0.5;
/// Default fractal dimension
pub const DEFAULT_FRACTAL_DIMENSION: f64 = 1.5;
/// Default Shannon entropy in bits
pub const DEFAULT_ENTROPY: f64 = 4.0;
/// Default visual balance
pub const DEFAULT_BALANCE: f64 = 0.5;
/// Default aesthetic score
pub const DEFAULT_AESTHETIC_SCORE: f64 = 5.0;

// Output
/// Threshold for switching to a single batch progress bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Log filter used when neither RUST_LOG nor --quiet is given
pub const DEFAULT_LOG_FILTER: &str = "info";
