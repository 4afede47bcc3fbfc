//! Golden palettes: the Material Design reference palettes in CIE LAB.
//!
//! Nineteen hand-tuned 14-tone palettes, one per Material color family, are
//! the templates every generated palette is derived from. Each entry is the
//! LAB value of the published sRGB color noted beside it. Brown, grey and
//! blue-grey have no published accents; their accent rows repeat tonal
//! steps (100, 200, 400, 700) so every palette has the same shape.
//!
//! The two tolerance tables weight how far each slot may move away from its
//! golden value when the seed sits somewhere else in the palette.

use mp_color::LabColor;

use crate::error::{PaletteError, Result};
use crate::hue::HueLabel;

// ---------------------------------------------------------------------------
// GoldenPalette
// ---------------------------------------------------------------------------

/// A named reference palette: 14 LAB colors in hue-label order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenPalette {
    name: &'static str,
    colors: [LabColor; HueLabel::COUNT],
}

impl GoldenPalette {
    #[must_use]
    pub const fn new(name: &'static str, colors: [LabColor; HueLabel::COUNT]) -> Self {
        Self { name, colors }
    }

    /// Material family name, e.g. `"deep-purple"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn colors(&self) -> &[LabColor; HueLabel::COUNT] {
        &self.colors
    }

    /// The color in slot `label`.
    #[must_use]
    pub const fn get(&self, label: HueLabel) -> LabColor {
        self.colors[label.index()]
    }

    /// Slots in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (HueLabel, LabColor)> + '_ {
        HueLabel::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// The built-in golden palettes, in matching order.
#[must_use]
pub const fn golden_palettes() -> &'static [GoldenPalette] {
    &GOLDEN_PALETTES
}

/// Look up a built-in golden palette by family name.
///
/// Names are kebab-case (`"light-blue"`); `_` and spaces are accepted in
/// place of `-` and case is ignored.
///
/// # Errors
///
/// [`PaletteError::UnknownGoldenPalette`] if no family has that name.
pub fn golden_palette(name: &str) -> Result<&'static GoldenPalette> {
    let wanted = name.trim().replace(['_', ' '], "-");
    GOLDEN_PALETTES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| PaletteError::UnknownGoldenPalette(name.to_string()))
}

/// Family names of the built-in golden palettes, in matching order.
pub fn golden_palette_names() -> impl Iterator<Item = &'static str> {
    GOLDEN_PALETTES.iter().map(GoldenPalette::name)
}

// ---------------------------------------------------------------------------
// Tolerance weights
// ---------------------------------------------------------------------------

/// Per-slot lightness weight. Slot `i` moves by `ΔL · LT[i] / LT[seed]`.
pub const LIGHTNESS_TOLERANCE: [f64; HueLabel::COUNT] = [
    2.048_875_457,
    5.124_792_061,
    8.751_659_557,
    12.076_287_74,
    13.914_495_42,
    15.927_388_93,
    15.465_858_18,
    15.097_792_27,
    15.137_386_73,
    15.098_183_72,
    18.4,
    18.4,
    18.4,
    18.4,
];

/// Per-slot chroma weight. Slot `i` moves by `ΔC · min(CT[i] / CT[seed], 1.25)`.
pub const CHROMA_TOLERANCE: [f64; HueLabel::COUNT] = [
    1.762_442_714,
    4.213_532_634,
    7.395_827_458,
    11.071_741_58,
    13.896_345_04,
    16.375_914_77,
    16.270_711_36,
    16.541_608_06,
    17.359_167_27,
    19.884_108_64,
    20.0,
    20.0,
    20.0,
    20.0,
];

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

const fn lab(l: f64, a: f64, b: f64) -> LabColor {
    LabColor::new_unchecked(l, a, b)
}

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
static GOLDEN_PALETTES: [GoldenPalette; 19] = [
    GoldenPalette::new(
        "red",
        [
            lab(94.67497003305085, 7.266715066863771, 1.000743882272359), // #ffebee
            lab(86.7897416761699, 18.370736761658012, 4.23637133971424), // #ffcdd2
            lab(72.0939162832561, 31.7948058298117, 13.2972443996896), // #ef9a9a
            lab(61.79353370051851, 44.129498163764545, 20.721477326799608), // #e57373
            lab(57.194195398949574, 59.6450006197361, 34.999830012940194), // #ef5350
            lab(55.603951071861374, 66.01287384845483, 47.67169313982772), // #f44336
            lab(51.66348502954747, 64.7487785020625, 43.244876694855286), // #e53935
            lab(47.09455666350969, 62.29836039074277, 40.67775424698388), // #d32f2f
            lab(43.77122063388739, 60.28633509183384, 40.31444686692952), // #c62828
            lab(39.555187078007386, 58.703681355389975, 41.66495027798629), // #b71c1c
            lab(70.1766274454071, 43.247949989729086, 25.33983078927029), // #ff8a80
            lab(59.80775699959328, 65.19382878315366, 37.675308397617094), // #ff5252
            lab(54.340983641391404, 79.43422580836507, 39.18854947699357), // #ff1744
            lab(44.4486875101701, 69.92242249827224, 58.66982140009662), // #d50000
        ],
    ),
    GoldenPalette::new(
        "pink",
        [
            lab(92.68053776327665, 9.515385232804263, -0.8994072969754852), // #fce4ec
            lab(81.86756643628922, 25.05688089723257, -1.9475235115390621), // #f8bbd0
            lab(70.90987389545768, 42.21705257720526, -1.095154624057959), // #f48fb1
            lab(61.08140805216186, 58.871233307587204, 2.1008764804626434), // #f06292
            lab(54.97970219986448, 68.56530938366889, 7.327430728560569), // #ec407a
            lab(50.872250340749176, 74.60459195925529, 15.353576256896073), // #e91e63
            lab(47.27738650144558, 70.77855776427805, 11.70434273264508), // #d81b60
            lab(42.58424189486517, 65.5411953138309, 7.595596439803797), // #c2185b
            lab(37.977492407254836, 60.74362621842075, 2.9847124951453474), // #ad1457
            lab(29.699290034849604, 51.90485023721311, -4.830186634107636), // #880e4f
            lab(69.2151130073612, 52.638050035844984, -0.046567905041516866), // #ff80ab
            lab(58.5257522766607, 74.2681115041493, 8.684459544163747), // #ff4081
            lab(51.95799020974562, 79.82930215780054, 24.524597036205755), // #f50057
            lab(42.99855185025132, 67.89568266235423, 3.8666422370504883), // #c51162
        ],
    ),
    GoldenPalette::new(
        "purple",
        [
            lab(92.4362655169016, 7.542927467702299, -6.039842848605881), // #f3e5f5
            lab(81.07399776904751, 19.563870217805036, -15.719625491986044), // #e1bee7
            lab(68.71394717711831, 33.79992812490556, -26.49539972339321), // #ce93d8
            lab(56.596161226236305, 47.5856631835152, -36.480816605410915), // #ba68c8
            lab(48.002791217624434, 57.30866443934879, -43.2561127152548), // #ab47bc
            lab(40.66211534692161, 64.01910773818436, -48.05930162591041), // #9c27b0
            lab(37.690702208992185, 61.13762767732481, -49.384803274243026), // #8e24aa
            lab(33.56291870731981, 57.637381239254104, -51.39557249855828), // #7b1fa2
            lab(29.865391314234515, 54.29737439901333, -52.6601973712463), // #6a1b9a
            lab(23.16724235420436, 48.51764437280498, -55.16267949015293), // #4a148c
            lab(69.44215450378555, 58.76510479960023, -44.91013100247328), // #ea80fc
            lab(58.49166594490828, 82.50083420476246, -61.818955029592935), // #e040fb
            lab(52.936544559594125, 91.21730232230053, -69.74681938797316), // #d500f9
            lab(46.666612491863035, 86.9781729991394, -83.60460960177707), // #aa00ff
        ],
    ),
    GoldenPalette::new(
        "deep-purple",
        [
            lab(92.49103426017201, 4.712320025752947, -6.532868071709763), // #ede7f6
            lab(81.24668319505597, 11.50642734909485, -16.666600637245367), // #d1c4e9
            lab(68.61488216554629, 20.395329051982824, -28.522018851715416), // #b39ddb
            lab(55.60369793053023, 30.933537768905005, -41.16439122358484), // #9575cd
            lab(45.834566190969426, 39.28806272235674, -50.523322052772635), // #7e57c2
            lab(36.608620229358664, 47.29686002828143, -59.111766586186846), // #673ab7
            lab(34.189791237562616, 46.60426065139123, -59.53961627676729), // #5e35b1
            lab(30.52713367338361, 46.01498224754519, -60.19975052509064), // #512da8
            lab(27.44585524877222, 44.96180431854785, -60.46395810756433), // #4527a0
            lab(21.98627670328218, 44.29296076245473, -60.93653655172098), // #311b92
            lab(65.28799675126322, 40.58535970769661, -53.49748836476189), // #b388ff
            lab(48.02158518138471, 60.693585769633074, -81.59932156734922), // #7c4dff
            lab(39.52155606828315, 76.278471850553, -95.68181788580785), // #651fff
            lab(35.07516098424622, 76.66666898629573, -91.21846779667199), // #6200ea
        ],
    ),
    GoldenPalette::new(
        "indigo",
        [
            lab(92.86314411983918, 1.5318147061061937, -6.025243528950552), // #e8eaf6
            lab(81.8348073705298, 4.460934955458907, -15.873561009736136), // #c5cae9
            lab(69.7796913795672, 7.9043652558912765, -26.3170846346932), // #9fa8da
            lab(57.48786519938736, 12.681019504822533, -37.23202012914528), // #7986cb
            lab(47.74592578811101, 18.520799302452374, -46.47540679000397), // #5c6bc0
            lab(38.334403614455404, 25.57700668170812, -55.28224153299287), // #3f51b5
            lab(35.15116453901552, 26.231812080381168, -54.53700978785404), // #3949ab
            lab(31.080429988007957, 27.07394930110124, -53.97505274579958), // #303f9f
            lab(27.026672080454922, 28.165266427558983, -53.28987325482218), // #283593
            lab(19.751201587921678, 30.60784576895101, -52.13866519297474), // #1a237e
            lab(67.46188954310868, 18.307121357267807, -50.25508191764978), // #8c9eff
            lab(51.7573604578357, 36.29828822032227, -75.07202106664637), // #536dfe
            lab(46.25462623851799, 45.3195182737009, -84.10540337268826), // #3d5afe
            lab(43.320657816041575, 50.8278089253954, -88.95003429434878), // #304ffe
        ],
    ),
    GoldenPalette::new(
        "blue",
        [
            lab(94.70682457348717, -2.835484735987326, -6.978044694792707), // #e3f2fd
            lab(86.8839842970016, -5.16908728759552, -17.88561192754956), // #bbdefb
            lab(79.0451532401558, -6.817753527015746, -28.968537490432176), // #90caf9
            lab(71.15083697242613, -5.994763756850707, -39.72549451158927), // #64b5f6
            lab(65.48106058907833, -2.735745792537936, -48.15471238926561), // #42a5f5
            lab(60.43009440850862, 2.079928897321559, -55.10935847069616), // #2196f3
            lab(55.62267676922188, 4.998684384486918, -55.02164729429915), // #1e88e5
            lab(49.27006645904875, 8.470398370314381, -54.494796838457546), // #1976d2
            lab(43.16828856394358, 11.968483076143844, -53.972567377977974), // #1565c0
            lab(32.17757793894193, 18.96054990229354, -53.45146365049088), // #0d47a1
            lab(71.83043303120209, 5.1741407567412185, -43.42843668682321), // #82b1ff
            lab(58.623369307572744, 16.938693482827173, -64.55292712562223), // #448aff
            lab(53.344409082728774, 24.822330636711797, -73.11564551780003), // #2979ff
            lab(47.52573967294287, 39.223860190908674, -82.60323350757174), // #2962ff
        ],
    ),
    GoldenPalette::new(
        "light-blue",
        [
            lab(95.35713467762652, -4.797149155388203, -6.550002550504308), // #e1f5fe
            lab(88.27942649540043, -10.836006614583892, -16.359361821940375), // #b3e5fc
            lab(81.10009044900976, -15.323054522981716, -26.419121191320947), // #81d4fa
            lab(74.44713958259777, -16.664432625362547, -35.19702686900037), // #4fc3f7
            lab(69.87836465637318, -14.291515332054693, -41.827430329755174), // #29b6f6
            lab(65.68851259178913, -9.612635721963692, -47.34091616039191), // #03a9f4
            lab(60.88357994308973, -7.252819027184943, -46.67753731595634), // #039be5
            lab(54.26166495426166, -3.8141836897908066, -45.97939475762498), // #0288d1
            lab(48.10661895072673, -1.378998784464347, -44.34466750206778), // #0277bd
            lab(36.34401147057282, 5.067812404713545, -43.11786257561915), // #01579b
            lab(82.33395133123096, -16.22598976209555, -27.190829860036736), // #80d8ff
            lab(74.68916977827267, -16.52908763710742, -39.14675998191272), // #40c4ff
            lab(68.21627525201207, -9.574595136110254, -49.33852811002477), // #00b0ff
            lab(58.21497590073301, 0.3425569959254471, -53.68272697734648), // #0091ea
        ],
    ),
    GoldenPalette::new(
        "cyan",
        [
            lab(95.69295154599753, -6.898716127301141, -3.994284229654421), // #e0f7fa
            lab(89.52842524059004, -16.412398289601725, -9.260466069266693), // #b2ebf2
            lab(83.32031214655748, -24.83036840728098, -14.568673583304603), // #80deea
            lab(77.35338313752958, -30.201708572215104, -18.92358284721101), // #4dd0e1
            lab(73.45322093857781, -31.88590390189383, -21.130459992513686), // #26c6da
            lab(69.97638465064783, -30.679850324547953, -23.186685661136707), // #00bcd4
            lab(64.44491716553777, -29.08337434584457, -21.154935769156214), // #00acc1
            lab(56.99816432961103, -27.31081477279451, -17.86988815767443), // #0097a7
            lab(49.75464182255671, -25.335383503694242, -15.024722591662787), // #00838f
            lab(36.52725894264432, -22.129641744194515, -9.176159146894303), // #006064
            lab(93.29389050111591, -34.410502519037486, -10.64745124924531), // #84ffff
            lab(91.20124068761265, -47.503754570703435, -13.990367926541492), // #18ffff
            lab(83.57499059292931, -36.465157841004014, -25.51640915196598), // #00e5ff
            lab(68.77335919896106, -28.722278119673373, -25.026440008756378), // #00b8d4
        ],
    ),
    GoldenPalette::new(
        "teal",
        [
            lab(94.18453941589918, -6.08351703428972, -1.5488916051161983), // #e0f2f1
            lab(85.68177077414457, -15.333179440298606, -2.8519825761476048), // #b2dfdb
            lab(76.85067847190405, -24.844059173189713, -3.8750785132192656), // #80cbc4
            lab(68.02762242570138, -32.566861154120716, -4.015231084407134), // #4db6ac
            lab(61.667257304525464, -36.06752603289354, -3.4734046401753815), // #26a69a
            lab(55.67310397390196, -36.66069960626328, -2.125617915169653), // #009688
            lab(51.059149495197715, -34.65019160301408, -1.3910484300432513), // #00897b
            lab(45.269081019218405, -32.13244775422941, -0.4526371852697775), // #00796b
            lab(39.36899076059384, -29.25264468583161, -0.03562564673170732), // #00695c
            lab(28.58363043701477, -24.585465516136413, 1.8037402162492389), // #004d40
            lab(94.19661883087349, -30.69239511124211, 1.1812438540941939), // #a7ffeb
            lab(91.36339485668456, -49.51722240192441, 5.55192461342946), // #64ffda
            lab(82.86631378461725, -57.53329766257198, 11.964108670641682), // #1de9b6
            lab(69.45156764374664, -46.18780190749311, 1.7810860104500836), // #00bfa5
        ],
    ),
    GoldenPalette::new(
        "green",
        [
            lab(95.30530183565223, -6.430415645739263, 4.292950594459599), // #e8f5e9
            lab(88.49014579152143, -15.23147744952702, 10.848261177683138), // #c8e6c9
            lab(81.22616870575376, -24.993886168551583, 18.144696803330884), // #a5d6a7
            lab(74.30361721558802, -35.56088696067356, 26.781515251907727), // #81c784
            lab(69.0430995277442, -42.61556126595995, 33.17109563126665), // #66bb6a
            lab(63.977421814072926, -48.54292673319982, 39.73241526342939), // #4caf50
            lab(58.777960853461366, -46.1153692478013, 37.838910745225576), // #43a047
            lab(52.41108688974904, -43.21761792485762, 35.62250659009424), // #388e3c
            lab(46.2813873076426, -40.25816227675361, 33.32343229338761), // #2e7d32
            lab(34.685655305814514, -34.75343878510312, 28.866739034359767), // #1b5e20
            lab(91.90326255854303, -27.722151216385328, 15.044709274416391), // #b9f6ca
            lab(86.19373269853777, -51.88705034696661, 20.99341251532256), // #69f0ae
            lab(80.68171398845192, -70.48375513920824, 41.59083030605586), // #00e676
            lab(70.82270670802811, -66.24995667030942, 46.16139838025752), // #00c853
        ],
    ),
    GoldenPalette::new(
        "light-green",
        [
            lab(96.70518169355954, -4.929987845095463, 6.397084523168894), // #f1f8e9
            lab(91.66416061199438, -12.057032041945693, 16.054604579275143), // #dcedc8
            lab(86.2244395865449, -19.613646834080622, 26.384906423454236), // #c5e1a5
            lab(80.83404879636919, -27.080171840756893, 37.378493742021334), // #aed581
            lab(76.79543725108964, -32.76659719736752, 45.912190572444445), // #9ccc65
            lab(72.90025297028019, -37.549139223927384, 53.51959496103027), // #8bc34a
            lab(67.21532310272079, -36.56304870773486, 50.49629051268894), // #7cb342
            lab(59.91051142210195, -35.77011466063357, 46.56465847976187), // #689f38
            lab(52.51015841084511, -34.47903440699235, 42.20723868724268), // #558b2f
            lab(39.41191983353878, -32.80460974352642, 35.255490585630014), // #33691e
            lab(94.47028616946585, -34.08423676075473, 47.71734436232242), // #ccff90
            lab(92.44426278977984, -48.4584813342927, 69.12947202337614), // #b2ff59
            lab(89.56820086035054, -70.46708908065091, 85.18578910718776), // #76ff03
            lab(78.74168780883441, -63.215539803379016, 74.08887650212957), // #64dd17
        ],
    ),
    GoldenPalette::new(
        "lime",
        [
            lab(97.99506057883428, -4.059632482741494, 9.355797602381521), // #f9fbe7
            lab(94.80926235976536, -9.237091467352855, 23.230650064824985), // #f0f4c3
            lab(91.85205843526167, -15.053917327011114, 38.86115182206598), // #e6ee9c
            lab(88.75812142080242, -19.542900400164097, 53.71785675783709), // #dce775
            lab(86.27404180729515, -22.173992891121596, 63.978639065232514), // #d4e157
            lab(84.20566835376492, -24.270643520989342, 72.79624067033038), // #cddc39
            lab(78.27915100603997, -21.181850056402496, 68.82763412297965), // #c0ca33
            lab(70.82385811892824, -17.788148932525672, 64.00327817988128), // #afb42b
            lab(62.936867012868035, -13.697412111684903, 58.513000509287835), // #9e9d24
            lab(49.498610881452535, -6.485230564384715, 49.67432722833751), // #827717
            lab(96.95884616328819, -20.71803845157516, 58.3689355032853), // #f4ff81
            lab(96.02999171030777, -27.144867126793983, 82.19168051872983), // #eeff41
            lab(93.24384980226247, -44.237650008149444, 89.84147414858437), // #c6ff00
            lab(85.92811356671437, -44.297782474859716, 83.65991159550865), // #aeea00
        ],
    ),
    GoldenPalette::new(
        "yellow",
        [
            lab(98.93885129752759, -3.0098470288543178, 10.765736833790008), // #fffde7
            lab(97.22689784824074, -6.174599368734491, 26.22932417355146), // #fff9c4
            lab(95.58092947828766, -8.907132848473886, 43.56297291446567), // #fff59d
            lab(94.09009515702486, -10.509628942710735, 60.20019514231188), // #fff176
            lab(93.06546746683087, -11.008558476013008, 71.76500826005477), // #ffee58
            lab(92.12975017760128, -10.830023094868302, 80.9090559640089), // #ffeb3b
            lab(87.12188349168609, -2.3764300099239355, 78.14868195373407), // #fdd835
            lab(80.96200442419905, 8.849333792729064, 75.05050700092679), // #fbc02d
            lab(75.00342770718086, 20.340173566879283, 72.24841925958934), // #f9a825
            lab(65.48207757431567, 39.647064970476094, 68.34872841768654), // #f57f17
            lab(97.91533389324526, -15.396571041188745, 54.17044710939054), // #ffff8d
            lab(97.1392672243063, -21.553748216377066, 94.47797505367026), // #ffff00
            lab(91.73374303632875, -11.407643219325081, 90.55516406926655), // #ffea00
            lab(86.68063081661892, -1.4174553112750177, 86.95578464784414), // #ffd600
        ],
    ),
    GoldenPalette::new(
        "amber",
        [
            lab(97.5642392074337, -1.445525639405032, 11.881254316297674), // #fff8e1
            lab(93.67057953749456, -1.8693096862072434, 30.02888670415651), // #ffecb3
            lab(89.94571492804107, -1.0224503814769692, 49.649542361642276), // #ffe082
            lab(86.71009164153801, 1.0496066396428194, 68.77377342409739), // #ffd54f
            lab(83.78773993319211, 5.248231820098425, 78.92920457852716), // #ffca28
            lab(81.52191382080228, 9.403655370707199, 82.69257112982746), // #ffc107
            lab(78.17240973804697, 16.628512886531887, 81.09358318806208), // #ffb300
            lab(73.80899654381052, 26.53614315250874, 78.21754052181723), // #ffa000
            lab(70.1134511665764, 35.3007623359744, 75.87510992138593), // #ff8f00
            lab(63.86460405565717, 50.94648214505959, 72.17815682124423), // #ff6f00
            lab(91.15910366548317, -3.8054708258777326, 52.564112431149155), // #ffe57f
            lab(87.11197258588605, -0.6371107728534442, 74.70376967587917), // #ffd740
            lab(82.24120015883581, 7.797196791400063, 83.86101177681155), // #ffc400
            lab(76.3087317497233, 20.803357634162744, 79.85227282964624), // #ffab00
        ],
    ),
    GoldenPalette::new(
        "orange",
        [
            lab(96.30459517801387, 0.923151172282477, 10.598439446083074), // #fff3e0
            lab(90.68320082865087, 4.103774964681062, 26.485793721916128), // #ffe0b2
            lab(85.00055287186233, 9.047181758866651, 44.51407622580792), // #ffcc80
            lab(79.42428495742953, 16.452610724439875, 62.08721739074201), // #ffb74d
            lab(75.47792699289774, 23.395742928451867, 72.64347611236501), // #ffa726
            lab(72.04246561548388, 30.681921012382098, 77.08579298904603), // #ff9800
            lab(68.94724338946975, 35.22014778433863, 74.88425044595111), // #fb8c00
            lab(64.83017495535229, 40.91200730099703, 71.9596053545428), // #f57c00
            lab(60.8534207471871, 46.41483590510681, 69.18061963415211), // #ef6c00
            lab(54.77571742962287, 55.282751019360035, 65.10193403547922), // #e65100
            lab(86.21759634020242, 6.4657419514513315, 46.02837805990554), // #ffd180
            lab(76.53413108895677, 22.13258825701675, 64.56785425614368), // #ffab40
            lab(70.53644526966606, 34.27963604096734, 76.13818396507406), // #ff9100
            lab(63.51099671896668, 51.864017053146085, 71.98145101706768), // #ff6d00
        ],
    ),
    GoldenPalette::new(
        "deep-orange",
        [
            lab(93.69219844671957, 5.763979334358293, 3.1700162796469034), // #fbe9e7
            lab(86.04629434276428, 15.750843803958192, 14.828476927090994), // #ffccbc
            lab(77.54010042938336, 27.90113842540043, 25.99645229289065), // #ffab91
            lab(69.74095456707857, 41.14487377552256, 39.443320178900024), // #ff8a65
            lab(64.37085344539341, 51.890379620443575, 50.81312471046415), // #ff7043
            lab(60.06780837277435, 61.65258736118817, 61.54771829165221), // #ff5722
            lab(57.28707915232363, 60.3250664308812, 60.07341536376447), // #f4511e
            lab(53.810052616293845, 58.36760943780162, 58.19586806694884), // #e64a19
            lab(50.301352405105874, 56.40104898089937, 55.924141992404344), // #d84315
            lab(43.86477994548343, 52.970887703910726, 52.30067989225532), // #bf360c
            lab(74.366825534057, 33.03668908148166, 30.90011144697837), // #ff9e80
            lab(63.98924283094422, 52.6882242258791, 51.88896433643735), // #ff6e40
            lab(56.68807279974064, 70.27095592629895, 68.55849470790058), // #ff3d00
            lab(48.484372137486915, 65.19753527624539, 61.21075237022309), // #dd2c00
        ],
    ),
    GoldenPalette::new(
        "brown",
        [
            lab(93.29864888069987, 0.9915456090475727, 1.442353076378411), // #efebe9
            lab(82.80884359004081, 3.116221903342209, 3.3523059451463055), // #d7ccc8
            lab(70.95493047668185, 5.469742193344784, 5.449009494553492), // #bcaaa4
            lab(58.712934619103066, 7.990991075363385, 8.352488495367627), // #a1887f
            lab(49.150208552875895, 10.570984981000397, 10.831440151197924), // #8d6e63
            lab(39.63200151837749, 13.138881961627241, 13.531574711511885), // #795548
            lab(35.60099668201576, 12.403528477572923, 12.1043218390245), // #6d4c41
            lab(30.084271265759952, 11.317148149878081, 10.547484304296217), // #5d4037
            lab(24.555014696416578, 10.816613316782464, 8.506555306791984), // #4e342e
            lab(18.35055226514404, 10.225725550338765, 7.058582769882571), // #3e2723
            lab(82.80884359004081, 3.116221903342209, 3.3523059451463055), // #d7ccc8
            lab(70.95493047668185, 5.469742193344784, 5.449009494553492), // #bcaaa4
            lab(49.150208552875895, 10.570984981000397, 10.831440151197924), // #8d6e63
            lab(30.084271265759952, 11.317148149878081, 10.547484304296217), // #5d4037
        ],
    ),
    GoldenPalette::new(
        "grey",
        [
            lab(98.27202740980219, -1.6418393644634932e-05, 6.567357457853973e-06), // #fafafa
            lab(96.53749336548567, -1.616917905122861e-05, 6.467671598286984e-06), // #f5f5f5
            lab(94.0978378987781, -1.581865383126768e-05, 6.327461532507073e-06), // #eeeeee
            lab(89.17728373493613, -1.511167768697419e-05, 6.044671074789676e-06), // #e0e0e0
            lab(76.61119902231323, -1.330620591488696e-05, 5.322482343750323e-06), // #bdbdbd
            lab(65.11424774127516, -1.1654345155598378e-05, 4.661738062239351e-06), // #9e9e9e
            lab(49.238989620828065, -9.373417431124409e-06, 3.7493669724497636e-06), // #757575
            lab(41.14266843804848, -8.210152946386273e-06, 3.2840611896567395e-06), // #616161
            lab(27.974857206003705, -6.318226192236764e-06, 2.5272904768947058e-06), // #424242
            lab(12.740011331302725, -4.129311698131133e-06, 1.6517246792524531e-06), // #212121
            lab(100.00000386666655, -1.6666666158293708e-05, 6.666666463317483e-06), // #ffffff
            lab(94.0978378987781, -1.581865383126768e-05, 6.327461532507073e-06), // #eeeeee
            lab(76.61119902231323, -1.330620591488696e-05, 5.322482343750323e-06), // #bdbdbd
            lab(41.14266843804848, -8.210152946386273e-06, 3.2840611896567395e-06), // #616161
        ],
    ),
    GoldenPalette::new(
        "blue-grey",
        [
            lab(94.27665212516236, -0.637571046109342, -1.313515378996688), // #eceff1
            lab(85.77788001492097, -2.2777811084512822, -3.0177758416151557), // #cfd8dc
            lab(76.12296325015231, -3.401502988883809, -5.16867892977908), // #b0bec5
            lab(66.16340108908365, -4.819627183079045, -7.520697631614404), // #90a4ae
            lab(58.35752478513645, -5.7195089100892105, -9.165988916613488), // #78909c
            lab(50.70748082202715, -6.837992965799455, -10.956055112409357), // #607d8b
            lab(44.85917867647632, -6.411990559239578, -9.74511982878765), // #546e7a
            lab(36.92458930566504, -5.319878610845596, -8.341943474561553), // #455a64
            lab(29.115334784637618, -4.168907828645069, -6.8629962199973304), // #37474f
            lab(19.958338450799914, -3.3116721453186617, -5.4486142104736786), // #263238
            lab(85.77788001492097, -2.2777811084512822, -3.0177758416151557), // #cfd8dc
            lab(76.12296325015231, -3.401502988883809, -5.16867892977908), // #b0bec5
            lab(58.35752478513645, -5.7195089100892105, -9.165988916613488), // #78909c
            lab(36.92458930566504, -5.319878610845596, -8.341943474561553), // #455a64
        ],
    ),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mp_color::RgbColor;
    use pretty_assertions::assert_eq;

    #[test]
    fn nineteen_families_in_order() {
        let names: Vec<_> = golden_palette_names().collect();
        assert_eq!(
            names,
            [
                "red",
                "pink",
                "purple",
                "deep-purple",
                "indigo",
                "blue",
                "light-blue",
                "cyan",
                "teal",
                "green",
                "light-green",
                "lime",
                "yellow",
                "amber",
                "orange",
                "deep-orange",
                "brown",
                "grey",
                "blue-grey",
            ]
        );
    }

    #[test]
    fn every_entry_is_a_valid_lab_color() {
        for palette in golden_palettes() {
            for (label, c) in palette.iter() {
                assert!(
                    LabColor::lab(c.lightness(), c.a(), c.b()).is_ok(),
                    "{} {label}: {c:?}",
                    palette.name()
                );
                assert!(c.lightness() < 100.0 + 1e-4, "{} {label}", palette.name());
            }
        }
    }

    #[test]
    fn entries_are_lab_of_material_hex() {
        let red = golden_palette("red").unwrap();
        let expected = [
            "#ffebee", "#ffcdd2", "#ef9a9a", "#e57373", "#ef5350", "#f44336", "#e53935",
            "#d32f2f", "#c62828", "#b71c1c", "#ff8a80", "#ff5252", "#ff1744", "#d50000",
        ];
        for ((label, c), hex) in red.iter().zip(expected) {
            assert_eq!(c, LabColor::from_hex(hex).unwrap(), "red {label}");
            assert_eq!(c.to_rgb().to_hex(), hex, "red {label}");
        }
    }

    #[test]
    fn entries_snap_back_to_srgb() {
        for palette in golden_palettes() {
            for (label, c) in palette.iter() {
                let rgb = c.to_rgb();
                let again = RgbColor::from_hex(&rgb.to_hex()).unwrap().to_lab();
                assert_eq!(again, c, "{} {label}", palette.name());
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(golden_palette("Blue_Grey").unwrap().name(), "blue-grey");
        assert_eq!(golden_palette("deep purple").unwrap().name(), "deep-purple");
        assert_eq!(
            golden_palette("mauve").unwrap_err(),
            PaletteError::UnknownGoldenPalette("mauve".into())
        );
    }

    #[test]
    fn indigo_900() {
        let indigo = golden_palette("indigo").unwrap();
        assert_eq!(indigo.get(HueLabel::H900).to_rgb().to_hex(), "#1a237e");
    }

    #[test]
    fn tolerance_weights_are_positive() {
        assert!(LIGHTNESS_TOLERANCE.iter().all(|&w| w > 0.0));
        assert!(CHROMA_TOLERANCE.iter().all(|&w| w > 0.0));
    }
}
