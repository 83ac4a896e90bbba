//! The WHATWG named character reference table, committed in generated form.
//!
//! Entries are sorted by name in ascending byte order and are unique. Legacy
//! references appear both with and without their terminating semicolon; the
//! semicolon form sorts immediately after its legacy twin, so a longest-match
//! scan over candidates naturally prefers it.
//!
//! @see https://html.spec.whatwg.org/multipage/named-characters.html

use super::NamedReference;

pub static NAMED_REFERENCES: [NamedReference; 2231] = [
    NamedReference { name: "AElig", codepoints: [0x00C6, 0x0000] },
    NamedReference { name: "AElig;", codepoints: [0x00C6, 0x0000] },
    NamedReference { name: "AMP", codepoints: [0x0026, 0x0000] },
    NamedReference { name: "AMP;", codepoints: [0x0026, 0x0000] },
    NamedReference { name: "Aacute", codepoints: [0x00C1, 0x0000] },
    NamedReference { name: "Aacute;", codepoints: [0x00C1, 0x0000] },
    NamedReference { name: "Abreve;", codepoints: [0x0102, 0x0000] },
    NamedReference { name: "Acirc", codepoints: [0x00C2, 0x0000] },
    NamedReference { name: "Acirc;", codepoints: [0x00C2, 0x0000] },
    NamedReference { name: "Acy;", codepoints: [0x0410, 0x0000] },
    NamedReference { name: "Afr;", codepoints: [0x1D504, 0x0000] },
    NamedReference { name: "Agrave", codepoints: [0x00C0, 0x0000] },
    NamedReference { name: "Agrave;", codepoints: [0x00C0, 0x0000] },
    NamedReference { name: "Alpha;", codepoints: [0x0391, 0x0000] },
    NamedReference { name: "Amacr;", codepoints: [0x0100, 0x0000] },
    NamedReference { name: "And;", codepoints: [0x2A53, 0x0000] },
    NamedReference { name: "Aogon;", codepoints: [0x0104, 0x0000] },
    NamedReference { name: "Aopf;", codepoints: [0x1D538, 0x0000] },
    NamedReference { name: "ApplyFunction;", codepoints: [0x2061, 0x0000] },
    NamedReference { name: "Aring", codepoints: [0x00C5, 0x0000] },
    NamedReference { name: "Aring;", codepoints: [0x00C5, 0x0000] },
    NamedReference { name: "Ascr;", codepoints: [0x1D49C, 0x0000] },
    NamedReference { name: "Assign;", codepoints: [0x2254, 0x0000] },
    NamedReference { name: "Atilde", codepoints: [0x00C3, 0x0000] },
    NamedReference { name: "Atilde;", codepoints: [0x00C3, 0x0000] },
    NamedReference { name: "Auml", codepoints: [0x00C4, 0x0000] },
    NamedReference { name: "Auml;", codepoints: [0x00C4, 0x0000] },
    NamedReference { name: "Backslash;", codepoints: [0x2216, 0x0000] },
    NamedReference { name: "Barv;", codepoints: [0x2AE7, 0x0000] },
    NamedReference { name: "Barwed;", codepoints: [0x2306, 0x0000] },
    NamedReference { name: "Bcy;", codepoints: [0x0411, 0x0000] },
    NamedReference { name: "Because;", codepoints: [0x2235, 0x0000] },
    NamedReference { name: "Bernoullis;", codepoints: [0x212C, 0x0000] },
    NamedReference { name: "Beta;", codepoints: [0x0392, 0x0000] },
    NamedReference { name: "Bfr;", codepoints: [0x1D505, 0x0000] },
    NamedReference { name: "Bopf;", codepoints: [0x1D539, 0x0000] },
    NamedReference { name: "Breve;", codepoints: [0x02D8, 0x0000] },
    NamedReference { name: "Bscr;", codepoints: [0x212C, 0x0000] },
    NamedReference { name: "Bumpeq;", codepoints: [0x224E, 0x0000] },
    NamedReference { name: "CHcy;", codepoints: [0x0427, 0x0000] },
    NamedReference { name: "COPY", codepoints: [0x00A9, 0x0000] },
    NamedReference { name: "COPY;", codepoints: [0x00A9, 0x0000] },
    NamedReference { name: "Cacute;", codepoints: [0x0106, 0x0000] },
    NamedReference { name: "Cap;", codepoints: [0x22D2, 0x0000] },
    NamedReference { name: "CapitalDifferentialD;", codepoints: [0x2145, 0x0000] },
    NamedReference { name: "Cayleys;", codepoints: [0x212D, 0x0000] },
    NamedReference { name: "Ccaron;", codepoints: [0x010C, 0x0000] },
    NamedReference { name: "Ccedil", codepoints: [0x00C7, 0x0000] },
    NamedReference { name: "Ccedil;", codepoints: [0x00C7, 0x0000] },
    NamedReference { name: "Ccirc;", codepoints: [0x0108, 0x0000] },
    NamedReference { name: "Cconint;", codepoints: [0x2230, 0x0000] },
    NamedReference { name: "Cdot;", codepoints: [0x010A, 0x0000] },
    NamedReference { name: "Cedilla;", codepoints: [0x00B8, 0x0000] },
    NamedReference { name: "CenterDot;", codepoints: [0x00B7, 0x0000] },
    NamedReference { name: "Cfr;", codepoints: [0x212D, 0x0000] },
    NamedReference { name: "Chi;", codepoints: [0x03A7, 0x0000] },
    NamedReference { name: "CircleDot;", codepoints: [0x2299, 0x0000] },
    NamedReference { name: "CircleMinus;", codepoints: [0x2296, 0x0000] },
    NamedReference { name: "CirclePlus;", codepoints: [0x2295, 0x0000] },
    NamedReference { name: "CircleTimes;", codepoints: [0x2297, 0x0000] },
    NamedReference { name: "ClockwiseContourIntegral;", codepoints: [0x2232, 0x0000] },
    NamedReference { name: "CloseCurlyDoubleQuote;", codepoints: [0x201D, 0x0000] },
    NamedReference { name: "CloseCurlyQuote;", codepoints: [0x2019, 0x0000] },
    NamedReference { name: "Colon;", codepoints: [0x2237, 0x0000] },
    NamedReference { name: "Colone;", codepoints: [0x2A74, 0x0000] },
    NamedReference { name: "Congruent;", codepoints: [0x2261, 0x0000] },
    NamedReference { name: "Conint;", codepoints: [0x222F, 0x0000] },
    NamedReference { name: "ContourIntegral;", codepoints: [0x222E, 0x0000] },
    NamedReference { name: "Copf;", codepoints: [0x2102, 0x0000] },
    NamedReference { name: "Coproduct;", codepoints: [0x2210, 0x0000] },
    NamedReference { name: "CounterClockwiseContourIntegral;", codepoints: [0x2233, 0x0000] },
    NamedReference { name: "Cross;", codepoints: [0x2A2F, 0x0000] },
    NamedReference { name: "Cscr;", codepoints: [0x1D49E, 0x0000] },
    NamedReference { name: "Cup;", codepoints: [0x22D3, 0x0000] },
    NamedReference { name: "CupCap;", codepoints: [0x224D, 0x0000] },
    NamedReference { name: "DD;", codepoints: [0x2145, 0x0000] },
    NamedReference { name: "DDotrahd;", codepoints: [0x2911, 0x0000] },
    NamedReference { name: "DJcy;", codepoints: [0x0402, 0x0000] },
    NamedReference { name: "DScy;", codepoints: [0x0405, 0x0000] },
    NamedReference { name: "DZcy;", codepoints: [0x040F, 0x0000] },
    NamedReference { name: "Dagger;", codepoints: [0x2021, 0x0000] },
    NamedReference { name: "Darr;", codepoints: [0x21A1, 0x0000] },
    NamedReference { name: "Dashv;", codepoints: [0x2AE4, 0x0000] },
    NamedReference { name: "Dcaron;", codepoints: [0x010E, 0x0000] },
    NamedReference { name: "Dcy;", codepoints: [0x0414, 0x0000] },
    NamedReference { name: "Del;", codepoints: [0x2207, 0x0000] },
    NamedReference { name: "Delta;", codepoints: [0x0394, 0x0000] },
    NamedReference { name: "Dfr;", codepoints: [0x1D507, 0x0000] },
    NamedReference { name: "DiacriticalAcute;", codepoints: [0x00B4, 0x0000] },
    NamedReference { name: "DiacriticalDot;", codepoints: [0x02D9, 0x0000] },
    NamedReference { name: "DiacriticalDoubleAcute;", codepoints: [0x02DD, 0x0000] },
    NamedReference { name: "DiacriticalGrave;", codepoints: [0x0060, 0x0000] },
    NamedReference { name: "DiacriticalTilde;", codepoints: [0x02DC, 0x0000] },
    NamedReference { name: "Diamond;", codepoints: [0x22C4, 0x0000] },
    NamedReference { name: "DifferentialD;", codepoints: [0x2146, 0x0000] },
    NamedReference { name: "Dopf;", codepoints: [0x1D53B, 0x0000] },
    NamedReference { name: "Dot;", codepoints: [0x00A8, 0x0000] },
    NamedReference { name: "DotDot;", codepoints: [0x20DC, 0x0000] },
    NamedReference { name: "DotEqual;", codepoints: [0x2250, 0x0000] },
    NamedReference { name: "DoubleContourIntegral;", codepoints: [0x222F, 0x0000] },
    NamedReference { name: "DoubleDot;", codepoints: [0x00A8, 0x0000] },
    NamedReference { name: "DoubleDownArrow;", codepoints: [0x21D3, 0x0000] },
    NamedReference { name: "DoubleLeftArrow;", codepoints: [0x21D0, 0x0000] },
    NamedReference { name: "DoubleLeftRightArrow;", codepoints: [0x21D4, 0x0000] },
    NamedReference { name: "DoubleLeftTee;", codepoints: [0x2AE4, 0x0000] },
    NamedReference { name: "DoubleLongLeftArrow;", codepoints: [0x27F8, 0x0000] },
    NamedReference { name: "DoubleLongLeftRightArrow;", codepoints: [0x27FA, 0x0000] },
    NamedReference { name: "DoubleLongRightArrow;", codepoints: [0x27F9, 0x0000] },
    NamedReference { name: "DoubleRightArrow;", codepoints: [0x21D2, 0x0000] },
    NamedReference { name: "DoubleRightTee;", codepoints: [0x22A8, 0x0000] },
    NamedReference { name: "DoubleUpArrow;", codepoints: [0x21D1, 0x0000] },
    NamedReference { name: "DoubleUpDownArrow;", codepoints: [0x21D5, 0x0000] },
    NamedReference { name: "DoubleVerticalBar;", codepoints: [0x2225, 0x0000] },
    NamedReference { name: "DownArrow;", codepoints: [0x2193, 0x0000] },
    NamedReference { name: "DownArrowBar;", codepoints: [0x2913, 0x0000] },
    NamedReference { name: "DownArrowUpArrow;", codepoints: [0x21F5, 0x0000] },
    NamedReference { name: "DownBreve;", codepoints: [0x0311, 0x0000] },
    NamedReference { name: "DownLeftRightVector;", codepoints: [0x2950, 0x0000] },
    NamedReference { name: "DownLeftTeeVector;", codepoints: [0x295E, 0x0000] },
    NamedReference { name: "DownLeftVector;", codepoints: [0x21BD, 0x0000] },
    NamedReference { name: "DownLeftVectorBar;", codepoints: [0x2956, 0x0000] },
    NamedReference { name: "DownRightTeeVector;", codepoints: [0x295F, 0x0000] },
    NamedReference { name: "DownRightVector;", codepoints: [0x21C1, 0x0000] },
    NamedReference { name: "DownRightVectorBar;", codepoints: [0x2957, 0x0000] },
    NamedReference { name: "DownTee;", codepoints: [0x22A4, 0x0000] },
    NamedReference { name: "DownTeeArrow;", codepoints: [0x21A7, 0x0000] },
    NamedReference { name: "Downarrow;", codepoints: [0x21D3, 0x0000] },
    NamedReference { name: "Dscr;", codepoints: [0x1D49F, 0x0000] },
    NamedReference { name: "Dstrok;", codepoints: [0x0110, 0x0000] },
    NamedReference { name: "ENG;", codepoints: [0x014A, 0x0000] },
    NamedReference { name: "ETH", codepoints: [0x00D0, 0x0000] },
    NamedReference { name: "ETH;", codepoints: [0x00D0, 0x0000] },
    NamedReference { name: "Eacute", codepoints: [0x00C9, 0x0000] },
    NamedReference { name: "Eacute;", codepoints: [0x00C9, 0x0000] },
    NamedReference { name: "Ecaron;", codepoints: [0x011A, 0x0000] },
    NamedReference { name: "Ecirc", codepoints: [0x00CA, 0x0000] },
    NamedReference { name: "Ecirc;", codepoints: [0x00CA, 0x0000] },
    NamedReference { name: "Ecy;", codepoints: [0x042D, 0x0000] },
    NamedReference { name: "Edot;", codepoints: [0x0116, 0x0000] },
    NamedReference { name: "Efr;", codepoints: [0x1D508, 0x0000] },
    NamedReference { name: "Egrave", codepoints: [0x00C8, 0x0000] },
    NamedReference { name: "Egrave;", codepoints: [0x00C8, 0x0000] },
    NamedReference { name: "Element;", codepoints: [0x2208, 0x0000] },
    NamedReference { name: "Emacr;", codepoints: [0x0112, 0x0000] },
    NamedReference { name: "EmptySmallSquare;", codepoints: [0x25FB, 0x0000] },
    NamedReference { name: "EmptyVerySmallSquare;", codepoints: [0x25AB, 0x0000] },
    NamedReference { name: "Eogon;", codepoints: [0x0118, 0x0000] },
    NamedReference { name: "Eopf;", codepoints: [0x1D53C, 0x0000] },
    NamedReference { name: "Epsilon;", codepoints: [0x0395, 0x0000] },
    NamedReference { name: "Equal;", codepoints: [0x2A75, 0x0000] },
    NamedReference { name: "EqualTilde;", codepoints: [0x2242, 0x0000] },
    NamedReference { name: "Equilibrium;", codepoints: [0x21CC, 0x0000] },
    NamedReference { name: "Escr;", codepoints: [0x2130, 0x0000] },
    NamedReference { name: "Esim;", codepoints: [0x2A73, 0x0000] },
    NamedReference { name: "Eta;", codepoints: [0x0397, 0x0000] },
    NamedReference { name: "Euml", codepoints: [0x00CB, 0x0000] },
    NamedReference { name: "Euml;", codepoints: [0x00CB, 0x0000] },
    NamedReference { name: "Exists;", codepoints: [0x2203, 0x0000] },
    NamedReference { name: "ExponentialE;", codepoints: [0x2147, 0x0000] },
    NamedReference { name: "Fcy;", codepoints: [0x0424, 0x0000] },
    NamedReference { name: "Ffr;", codepoints: [0x1D509, 0x0000] },
    NamedReference { name: "FilledSmallSquare;", codepoints: [0x25FC, 0x0000] },
    NamedReference { name: "FilledVerySmallSquare;", codepoints: [0x25AA, 0x0000] },
    NamedReference { name: "Fopf;", codepoints: [0x1D53D, 0x0000] },
    NamedReference { name: "ForAll;", codepoints: [0x2200, 0x0000] },
    NamedReference { name: "Fouriertrf;", codepoints: [0x2131, 0x0000] },
    NamedReference { name: "Fscr;", codepoints: [0x2131, 0x0000] },
    NamedReference { name: "GJcy;", codepoints: [0x0403, 0x0000] },
    NamedReference { name: "GT", codepoints: [0x003E, 0x0000] },
    NamedReference { name: "GT;", codepoints: [0x003E, 0x0000] },
    NamedReference { name: "Gamma;", codepoints: [0x0393, 0x0000] },
    NamedReference { name: "Gammad;", codepoints: [0x03DC, 0x0000] },
    NamedReference { name: "Gbreve;", codepoints: [0x011E, 0x0000] },
    NamedReference { name: "Gcedil;", codepoints: [0x0122, 0x0000] },
    NamedReference { name: "Gcirc;", codepoints: [0x011C, 0x0000] },
    NamedReference { name: "Gcy;", codepoints: [0x0413, 0x0000] },
    NamedReference { name: "Gdot;", codepoints: [0x0120, 0x0000] },
    NamedReference { name: "Gfr;", codepoints: [0x1D50A, 0x0000] },
    NamedReference { name: "Gg;", codepoints: [0x22D9, 0x0000] },
    NamedReference { name: "Gopf;", codepoints: [0x1D53E, 0x0000] },
    NamedReference { name: "GreaterEqual;", codepoints: [0x2265, 0x0000] },
    NamedReference { name: "GreaterEqualLess;", codepoints: [0x22DB, 0x0000] },
    NamedReference { name: "GreaterFullEqual;", codepoints: [0x2267, 0x0000] },
    NamedReference { name: "GreaterGreater;", codepoints: [0x2AA2, 0x0000] },
    NamedReference { name: "GreaterLess;", codepoints: [0x2277, 0x0000] },
    NamedReference { name: "GreaterSlantEqual;", codepoints: [0x2A7E, 0x0000] },
    NamedReference { name: "GreaterTilde;", codepoints: [0x2273, 0x0000] },
    NamedReference { name: "Gscr;", codepoints: [0x1D4A2, 0x0000] },
    NamedReference { name: "Gt;", codepoints: [0x226B, 0x0000] },
    NamedReference { name: "HARDcy;", codepoints: [0x042A, 0x0000] },
    NamedReference { name: "Hacek;", codepoints: [0x02C7, 0x0000] },
    NamedReference { name: "Hat;", codepoints: [0x005E, 0x0000] },
    NamedReference { name: "Hcirc;", codepoints: [0x0124, 0x0000] },
    NamedReference { name: "Hfr;", codepoints: [0x210C, 0x0000] },
    NamedReference { name: "HilbertSpace;", codepoints: [0x210B, 0x0000] },
    NamedReference { name: "Hopf;", codepoints: [0x210D, 0x0000] },
    NamedReference { name: "HorizontalLine;", codepoints: [0x2500, 0x0000] },
    NamedReference { name: "Hscr;", codepoints: [0x210B, 0x0000] },
    NamedReference { name: "Hstrok;", codepoints: [0x0126, 0x0000] },
    NamedReference { name: "HumpDownHump;", codepoints: [0x224E, 0x0000] },
    NamedReference { name: "HumpEqual;", codepoints: [0x224F, 0x0000] },
    NamedReference { name: "IEcy;", codepoints: [0x0415, 0x0000] },
    NamedReference { name: "IJlig;", codepoints: [0x0132, 0x0000] },
    NamedReference { name: "IOcy;", codepoints: [0x0401, 0x0000] },
    NamedReference { name: "Iacute", codepoints: [0x00CD, 0x0000] },
    NamedReference { name: "Iacute;", codepoints: [0x00CD, 0x0000] },
    NamedReference { name: "Icirc", codepoints: [0x00CE, 0x0000] },
    NamedReference { name: "Icirc;", codepoints: [0x00CE, 0x0000] },
    NamedReference { name: "Icy;", codepoints: [0x0418, 0x0000] },
    NamedReference { name: "Idot;", codepoints: [0x0130, 0x0000] },
    NamedReference { name: "Ifr;", codepoints: [0x2111, 0x0000] },
    NamedReference { name: "Igrave", codepoints: [0x00CC, 0x0000] },
    NamedReference { name: "Igrave;", codepoints: [0x00CC, 0x0000] },
    NamedReference { name: "Im;", codepoints: [0x2111, 0x0000] },
    NamedReference { name: "Imacr;", codepoints: [0x012A, 0x0000] },
    NamedReference { name: "ImaginaryI;", codepoints: [0x2148, 0x0000] },
    NamedReference { name: "Implies;", codepoints: [0x21D2, 0x0000] },
    NamedReference { name: "Int;", codepoints: [0x222C, 0x0000] },
    NamedReference { name: "Integral;", codepoints: [0x222B, 0x0000] },
    NamedReference { name: "Intersection;", codepoints: [0x22C2, 0x0000] },
    NamedReference { name: "InvisibleComma;", codepoints: [0x2063, 0x0000] },
    NamedReference { name: "InvisibleTimes;", codepoints: [0x2062, 0x0000] },
    NamedReference { name: "Iogon;", codepoints: [0x012E, 0x0000] },
    NamedReference { name: "Iopf;", codepoints: [0x1D540, 0x0000] },
    NamedReference { name: "Iota;", codepoints: [0x0399, 0x0000] },
    NamedReference { name: "Iscr;", codepoints: [0x2110, 0x0000] },
    NamedReference { name: "Itilde;", codepoints: [0x0128, 0x0000] },
    NamedReference { name: "Iukcy;", codepoints: [0x0406, 0x0000] },
    NamedReference { name: "Iuml", codepoints: [0x00CF, 0x0000] },
    NamedReference { name: "Iuml;", codepoints: [0x00CF, 0x0000] },
    NamedReference { name: "Jcirc;", codepoints: [0x0134, 0x0000] },
    NamedReference { name: "Jcy;", codepoints: [0x0419, 0x0000] },
    NamedReference { name: "Jfr;", codepoints: [0x1D50D, 0x0000] },
    NamedReference { name: "Jopf;", codepoints: [0x1D541, 0x0000] },
    NamedReference { name: "Jscr;", codepoints: [0x1D4A5, 0x0000] },
    NamedReference { name: "Jsercy;", codepoints: [0x0408, 0x0000] },
    NamedReference { name: "Jukcy;", codepoints: [0x0404, 0x0000] },
    NamedReference { name: "KHcy;", codepoints: [0x0425, 0x0000] },
    NamedReference { name: "KJcy;", codepoints: [0x040C, 0x0000] },
    NamedReference { name: "Kappa;", codepoints: [0x039A, 0x0000] },
    NamedReference { name: "Kcedil;", codepoints: [0x0136, 0x0000] },
    NamedReference { name: "Kcy;", codepoints: [0x041A, 0x0000] },
    NamedReference { name: "Kfr;", codepoints: [0x1D50E, 0x0000] },
    NamedReference { name: "Kopf;", codepoints: [0x1D542, 0x0000] },
    NamedReference { name: "Kscr;", codepoints: [0x1D4A6, 0x0000] },
    NamedReference { name: "LJcy;", codepoints: [0x0409, 0x0000] },
    NamedReference { name: "LT", codepoints: [0x003C, 0x0000] },
    NamedReference { name: "LT;", codepoints: [0x003C, 0x0000] },
    NamedReference { name: "Lacute;", codepoints: [0x0139, 0x0000] },
    NamedReference { name: "Lambda;", codepoints: [0x039B, 0x0000] },
    NamedReference { name: "Lang;", codepoints: [0x27EA, 0x0000] },
    NamedReference { name: "Laplacetrf;", codepoints: [0x2112, 0x0000] },
    NamedReference { name: "Larr;", codepoints: [0x219E, 0x0000] },
    NamedReference { name: "Lcaron;", codepoints: [0x013D, 0x0000] },
    NamedReference { name: "Lcedil;", codepoints: [0x013B, 0x0000] },
    NamedReference { name: "Lcy;", codepoints: [0x041B, 0x0000] },
    NamedReference { name: "LeftAngleBracket;", codepoints: [0x27E8, 0x0000] },
    NamedReference { name: "LeftArrow;", codepoints: [0x2190, 0x0000] },
    NamedReference { name: "LeftArrowBar;", codepoints: [0x21E4, 0x0000] },
    NamedReference { name: "LeftArrowRightArrow;", codepoints: [0x21C6, 0x0000] },
    NamedReference { name: "LeftCeiling;", codepoints: [0x2308, 0x0000] },
    NamedReference { name: "LeftDoubleBracket;", codepoints: [0x27E6, 0x0000] },
    NamedReference { name: "LeftDownTeeVector;", codepoints: [0x2961, 0x0000] },
    NamedReference { name: "LeftDownVector;", codepoints: [0x21C3, 0x0000] },
    NamedReference { name: "LeftDownVectorBar;", codepoints: [0x2959, 0x0000] },
    NamedReference { name: "LeftFloor;", codepoints: [0x230A, 0x0000] },
    NamedReference { name: "LeftRightArrow;", codepoints: [0x2194, 0x0000] },
    NamedReference { name: "LeftRightVector;", codepoints: [0x294E, 0x0000] },
    NamedReference { name: "LeftTee;", codepoints: [0x22A3, 0x0000] },
    NamedReference { name: "LeftTeeArrow;", codepoints: [0x21A4, 0x0000] },
    NamedReference { name: "LeftTeeVector;", codepoints: [0x295A, 0x0000] },
    NamedReference { name: "LeftTriangle;", codepoints: [0x22B2, 0x0000] },
    NamedReference { name: "LeftTriangleBar;", codepoints: [0x29CF, 0x0000] },
    NamedReference { name: "LeftTriangleEqual;", codepoints: [0x22B4, 0x0000] },
    NamedReference { name: "LeftUpDownVector;", codepoints: [0x2951, 0x0000] },
    NamedReference { name: "LeftUpTeeVector;", codepoints: [0x2960, 0x0000] },
    NamedReference { name: "LeftUpVector;", codepoints: [0x21BF, 0x0000] },
    NamedReference { name: "LeftUpVectorBar;", codepoints: [0x2958, 0x0000] },
    NamedReference { name: "LeftVector;", codepoints: [0x21BC, 0x0000] },
    NamedReference { name: "LeftVectorBar;", codepoints: [0x2952, 0x0000] },
    NamedReference { name: "Leftarrow;", codepoints: [0x21D0, 0x0000] },
    NamedReference { name: "Leftrightarrow;", codepoints: [0x21D4, 0x0000] },
    NamedReference { name: "LessEqualGreater;", codepoints: [0x22DA, 0x0000] },
    NamedReference { name: "LessFullEqual;", codepoints: [0x2266, 0x0000] },
    NamedReference { name: "LessGreater;", codepoints: [0x2276, 0x0000] },
    NamedReference { name: "LessLess;", codepoints: [0x2AA1, 0x0000] },
    NamedReference { name: "LessSlantEqual;", codepoints: [0x2A7D, 0x0000] },
    NamedReference { name: "LessTilde;", codepoints: [0x2272, 0x0000] },
    NamedReference { name: "Lfr;", codepoints: [0x1D50F, 0x0000] },
    NamedReference { name: "Ll;", codepoints: [0x22D8, 0x0000] },
    NamedReference { name: "Lleftarrow;", codepoints: [0x21DA, 0x0000] },
    NamedReference { name: "Lmidot;", codepoints: [0x013F, 0x0000] },
    NamedReference { name: "LongLeftArrow;", codepoints: [0x27F5, 0x0000] },
    NamedReference { name: "LongLeftRightArrow;", codepoints: [0x27F7, 0x0000] },
    NamedReference { name: "LongRightArrow;", codepoints: [0x27F6, 0x0000] },
    NamedReference { name: "Longleftarrow;", codepoints: [0x27F8, 0x0000] },
    NamedReference { name: "Longleftrightarrow;", codepoints: [0x27FA, 0x0000] },
    NamedReference { name: "Longrightarrow;", codepoints: [0x27F9, 0x0000] },
    NamedReference { name: "Lopf;", codepoints: [0x1D543, 0x0000] },
    NamedReference { name: "LowerLeftArrow;", codepoints: [0x2199, 0x0000] },
    NamedReference { name: "LowerRightArrow;", codepoints: [0x2198, 0x0000] },
    NamedReference { name: "Lscr;", codepoints: [0x2112, 0x0000] },
    NamedReference { name: "Lsh;", codepoints: [0x21B0, 0x0000] },
    NamedReference { name: "Lstrok;", codepoints: [0x0141, 0x0000] },
    NamedReference { name: "Lt;", codepoints: [0x226A, 0x0000] },
    NamedReference { name: "Map;", codepoints: [0x2905, 0x0000] },
    NamedReference { name: "Mcy;", codepoints: [0x041C, 0x0000] },
    NamedReference { name: "MediumSpace;", codepoints: [0x205F, 0x0000] },
    NamedReference { name: "Mellintrf;", codepoints: [0x2133, 0x0000] },
    NamedReference { name: "Mfr;", codepoints: [0x1D510, 0x0000] },
    NamedReference { name: "MinusPlus;", codepoints: [0x2213, 0x0000] },
    NamedReference { name: "Mopf;", codepoints: [0x1D544, 0x0000] },
    NamedReference { name: "Mscr;", codepoints: [0x2133, 0x0000] },
    NamedReference { name: "Mu;", codepoints: [0x039C, 0x0000] },
    NamedReference { name: "NJcy;", codepoints: [0x040A, 0x0000] },
    NamedReference { name: "Nacute;", codepoints: [0x0143, 0x0000] },
    NamedReference { name: "Ncaron;", codepoints: [0x0147, 0x0000] },
    NamedReference { name: "Ncedil;", codepoints: [0x0145, 0x0000] },
    NamedReference { name: "Ncy;", codepoints: [0x041D, 0x0000] },
    NamedReference { name: "NegativeMediumSpace;", codepoints: [0x200B, 0x0000] },
    NamedReference { name: "NegativeThickSpace;", codepoints: [0x200B, 0x0000] },
    NamedReference { name: "NegativeThinSpace;", codepoints: [0x200B, 0x0000] },
    NamedReference { name: "NegativeVeryThinSpace;", codepoints: [0x200B, 0x0000] },
    NamedReference { name: "NestedGreaterGreater;", codepoints: [0x226B, 0x0000] },
    NamedReference { name: "NestedLessLess;", codepoints: [0x226A, 0x0000] },
    NamedReference { name: "NewLine;", codepoints: [0x000A, 0x0000] },
    NamedReference { name: "Nfr;", codepoints: [0x1D511, 0x0000] },
    NamedReference { name: "NoBreak;", codepoints: [0x2060, 0x0000] },
    NamedReference { name: "NonBreakingSpace;", codepoints: [0x00A0, 0x0000] },
    NamedReference { name: "Nopf;", codepoints: [0x2115, 0x0000] },
    NamedReference { name: "Not;", codepoints: [0x2AEC, 0x0000] },
    NamedReference { name: "NotCongruent;", codepoints: [0x2262, 0x0000] },
    NamedReference { name: "NotCupCap;", codepoints: [0x226D, 0x0000] },
    NamedReference { name: "NotDoubleVerticalBar;", codepoints: [0x2226, 0x0000] },
    NamedReference { name: "NotElement;", codepoints: [0x2209, 0x0000] },
    NamedReference { name: "NotEqual;", codepoints: [0x2260, 0x0000] },
    NamedReference { name: "NotEqualTilde;", codepoints: [0x2242, 0x0338] },
    NamedReference { name: "NotExists;", codepoints: [0x2204, 0x0000] },
    NamedReference { name: "NotGreater;", codepoints: [0x226F, 0x0000] },
    NamedReference { name: "NotGreaterEqual;", codepoints: [0x2271, 0x0000] },
    NamedReference { name: "NotGreaterFullEqual;", codepoints: [0x2267, 0x0338] },
    NamedReference { name: "NotGreaterGreater;", codepoints: [0x226B, 0x0338] },
    NamedReference { name: "NotGreaterLess;", codepoints: [0x2279, 0x0000] },
    NamedReference { name: "NotGreaterSlantEqual;", codepoints: [0x2A7E, 0x0338] },
    NamedReference { name: "NotGreaterTilde;", codepoints: [0x2275, 0x0000] },
    NamedReference { name: "NotHumpDownHump;", codepoints: [0x224E, 0x0338] },
    NamedReference { name: "NotHumpEqual;", codepoints: [0x224F, 0x0338] },
    NamedReference { name: "NotLeftTriangle;", codepoints: [0x22EA, 0x0000] },
    NamedReference { name: "NotLeftTriangleBar;", codepoints: [0x29CF, 0x0338] },
    NamedReference { name: "NotLeftTriangleEqual;", codepoints: [0x22EC, 0x0000] },
    NamedReference { name: "NotLess;", codepoints: [0x226E, 0x0000] },
    NamedReference { name: "NotLessEqual;", codepoints: [0x2270, 0x0000] },
    NamedReference { name: "NotLessGreater;", codepoints: [0x2278, 0x0000] },
    NamedReference { name: "NotLessLess;", codepoints: [0x226A, 0x0338] },
    NamedReference { name: "NotLessSlantEqual;", codepoints: [0x2A7D, 0x0338] },
    NamedReference { name: "NotLessTilde;", codepoints: [0x2274, 0x0000] },
    NamedReference { name: "NotNestedGreaterGreater;", codepoints: [0x2AA2, 0x0338] },
    NamedReference { name: "NotNestedLessLess;", codepoints: [0x2AA1, 0x0338] },
    NamedReference { name: "NotPrecedes;", codepoints: [0x2280, 0x0000] },
    NamedReference { name: "NotPrecedesEqual;", codepoints: [0x2AAF, 0x0338] },
    NamedReference { name: "NotPrecedesSlantEqual;", codepoints: [0x22E0, 0x0000] },
    NamedReference { name: "NotReverseElement;", codepoints: [0x220C, 0x0000] },
    NamedReference { name: "NotRightTriangle;", codepoints: [0x22EB, 0x0000] },
    NamedReference { name: "NotRightTriangleBar;", codepoints: [0x29D0, 0x0338] },
    NamedReference { name: "NotRightTriangleEqual;", codepoints: [0x22ED, 0x0000] },
    NamedReference { name: "NotSquareSubset;", codepoints: [0x228F, 0x0338] },
    NamedReference { name: "NotSquareSubsetEqual;", codepoints: [0x22E2, 0x0000] },
    NamedReference { name: "NotSquareSuperset;", codepoints: [0x2290, 0x0338] },
    NamedReference { name: "NotSquareSupersetEqual;", codepoints: [0x22E3, 0x0000] },
    NamedReference { name: "NotSubset;", codepoints: [0x2282, 0x20D2] },
    NamedReference { name: "NotSubsetEqual;", codepoints: [0x2288, 0x0000] },
    NamedReference { name: "NotSucceeds;", codepoints: [0x2281, 0x0000] },
    NamedReference { name: "NotSucceedsEqual;", codepoints: [0x2AB0, 0x0338] },
    NamedReference { name: "NotSucceedsSlantEqual;", codepoints: [0x22E1, 0x0000] },
    NamedReference { name: "NotSucceedsTilde;", codepoints: [0x227F, 0x0338] },
    NamedReference { name: "NotSuperset;", codepoints: [0x2283, 0x20D2] },
    NamedReference { name: "NotSupersetEqual;", codepoints: [0x2289, 0x0000] },
    NamedReference { name: "NotTilde;", codepoints: [0x2241, 0x0000] },
    NamedReference { name: "NotTildeEqual;", codepoints: [0x2244, 0x0000] },
    NamedReference { name: "NotTildeFullEqual;", codepoints: [0x2247, 0x0000] },
    NamedReference { name: "NotTildeTilde;", codepoints: [0x2249, 0x0000] },
    NamedReference { name: "NotVerticalBar;", codepoints: [0x2224, 0x0000] },
    NamedReference { name: "Nscr;", codepoints: [0x1D4A9, 0x0000] },
    NamedReference { name: "Ntilde", codepoints: [0x00D1, 0x0000] },
    NamedReference { name: "Ntilde;", codepoints: [0x00D1, 0x0000] },
    NamedReference { name: "Nu;", codepoints: [0x039D, 0x0000] },
    NamedReference { name: "OElig;", codepoints: [0x0152, 0x0000] },
    NamedReference { name: "Oacute", codepoints: [0x00D3, 0x0000] },
    NamedReference { name: "Oacute;", codepoints: [0x00D3, 0x0000] },
    NamedReference { name: "Ocirc", codepoints: [0x00D4, 0x0000] },
    NamedReference { name: "Ocirc;", codepoints: [0x00D4, 0x0000] },
    NamedReference { name: "Ocy;", codepoints: [0x041E, 0x0000] },
    NamedReference { name: "Odblac;", codepoints: [0x0150, 0x0000] },
    NamedReference { name: "Ofr;", codepoints: [0x1D512, 0x0000] },
    NamedReference { name: "Ograve", codepoints: [0x00D2, 0x0000] },
    NamedReference { name: "Ograve;", codepoints: [0x00D2, 0x0000] },
    NamedReference { name: "Omacr;", codepoints: [0x014C, 0x0000] },
    NamedReference { name: "Omega;", codepoints: [0x03A9, 0x0000] },
    NamedReference { name: "Omicron;", codepoints: [0x039F, 0x0000] },
    NamedReference { name: "Oopf;", codepoints: [0x1D546, 0x0000] },
    NamedReference { name: "OpenCurlyDoubleQuote;", codepoints: [0x201C, 0x0000] },
    NamedReference { name: "OpenCurlyQuote;", codepoints: [0x2018, 0x0000] },
    NamedReference { name: "Or;", codepoints: [0x2A54, 0x0000] },
    NamedReference { name: "Oscr;", codepoints: [0x1D4AA, 0x0000] },
    NamedReference { name: "Oslash", codepoints: [0x00D8, 0x0000] },
    NamedReference { name: "Oslash;", codepoints: [0x00D8, 0x0000] },
    NamedReference { name: "Otilde", codepoints: [0x00D5, 0x0000] },
    NamedReference { name: "Otilde;", codepoints: [0x00D5, 0x0000] },
    NamedReference { name: "Otimes;", codepoints: [0x2A37, 0x0000] },
    NamedReference { name: "Ouml", codepoints: [0x00D6, 0x0000] },
    NamedReference { name: "Ouml;", codepoints: [0x00D6, 0x0000] },
    NamedReference { name: "OverBar;", codepoints: [0x203E, 0x0000] },
    NamedReference { name: "OverBrace;", codepoints: [0x23DE, 0x0000] },
    NamedReference { name: "OverBracket;", codepoints: [0x23B4, 0x0000] },
    NamedReference { name: "OverParenthesis;", codepoints: [0x23DC, 0x0000] },
    NamedReference { name: "PartialD;", codepoints: [0x2202, 0x0000] },
    NamedReference { name: "Pcy;", codepoints: [0x041F, 0x0000] },
    NamedReference { name: "Pfr;", codepoints: [0x1D513, 0x0000] },
    NamedReference { name: "Phi;", codepoints: [0x03A6, 0x0000] },
    NamedReference { name: "Pi;", codepoints: [0x03A0, 0x0000] },
    NamedReference { name: "PlusMinus;", codepoints: [0x00B1, 0x0000] },
    NamedReference { name: "Poincareplane;", codepoints: [0x210C, 0x0000] },
    NamedReference { name: "Popf;", codepoints: [0x2119, 0x0000] },
    NamedReference { name: "Pr;", codepoints: [0x2ABB, 0x0000] },
    NamedReference { name: "Precedes;", codepoints: [0x227A, 0x0000] },
    NamedReference { name: "PrecedesEqual;", codepoints: [0x2AAF, 0x0000] },
    NamedReference { name: "PrecedesSlantEqual;", codepoints: [0x227C, 0x0000] },
    NamedReference { name: "PrecedesTilde;", codepoints: [0x227E, 0x0000] },
    NamedReference { name: "Prime;", codepoints: [0x2033, 0x0000] },
    NamedReference { name: "Product;", codepoints: [0x220F, 0x0000] },
    NamedReference { name: "Proportion;", codepoints: [0x2237, 0x0000] },
    NamedReference { name: "Proportional;", codepoints: [0x221D, 0x0000] },
    NamedReference { name: "Pscr;", codepoints: [0x1D4AB, 0x0000] },
    NamedReference { name: "Psi;", codepoints: [0x03A8, 0x0000] },
    NamedReference { name: "QUOT", codepoints: [0x0022, 0x0000] },
    NamedReference { name: "QUOT;", codepoints: [0x0022, 0x0000] },
    NamedReference { name: "Qfr;", codepoints: [0x1D514, 0x0000] },
    NamedReference { name: "Qopf;", codepoints: [0x211A, 0x0000] },
    NamedReference { name: "Qscr;", codepoints: [0x1D4AC, 0x0000] },
    NamedReference { name: "RBarr;", codepoints: [0x2910, 0x0000] },
    NamedReference { name: "REG", codepoints: [0x00AE, 0x0000] },
    NamedReference { name: "REG;", codepoints: [0x00AE, 0x0000] },
    NamedReference { name: "Racute;", codepoints: [0x0154, 0x0000] },
    NamedReference { name: "Rang;", codepoints: [0x27EB, 0x0000] },
    NamedReference { name: "Rarr;", codepoints: [0x21A0, 0x0000] },
    NamedReference { name: "Rarrtl;", codepoints: [0x2916, 0x0000] },
    NamedReference { name: "Rcaron;", codepoints: [0x0158, 0x0000] },
    NamedReference { name: "Rcedil;", codepoints: [0x0156, 0x0000] },
    NamedReference { name: "Rcy;", codepoints: [0x0420, 0x0000] },
    NamedReference { name: "Re;", codepoints: [0x211C, 0x0000] },
    NamedReference { name: "ReverseElement;", codepoints: [0x220B, 0x0000] },
    NamedReference { name: "ReverseEquilibrium;", codepoints: [0x21CB, 0x0000] },
    NamedReference { name: "ReverseUpEquilibrium;", codepoints: [0x296F, 0x0000] },
    NamedReference { name: "Rfr;", codepoints: [0x211C, 0x0000] },
    NamedReference { name: "Rho;", codepoints: [0x03A1, 0x0000] },
    NamedReference { name: "RightAngleBracket;", codepoints: [0x27E9, 0x0000] },
    NamedReference { name: "RightArrow;", codepoints: [0x2192, 0x0000] },
    NamedReference { name: "RightArrowBar;", codepoints: [0x21E5, 0x0000] },
    NamedReference { name: "RightArrowLeftArrow;", codepoints: [0x21C4, 0x0000] },
    NamedReference { name: "RightCeiling;", codepoints: [0x2309, 0x0000] },
    NamedReference { name: "RightDoubleBracket;", codepoints: [0x27E7, 0x0000] },
    NamedReference { name: "RightDownTeeVector;", codepoints: [0x295D, 0x0000] },
    NamedReference { name: "RightDownVector;", codepoints: [0x21C2, 0x0000] },
    NamedReference { name: "RightDownVectorBar;", codepoints: [0x2955, 0x0000] },
    NamedReference { name: "RightFloor;", codepoints: [0x230B, 0x0000] },
    NamedReference { name: "RightTee;", codepoints: [0x22A2, 0x0000] },
    NamedReference { name: "RightTeeArrow;", codepoints: [0x21A6, 0x0000] },
    NamedReference { name: "RightTeeVector;", codepoints: [0x295B, 0x0000] },
    NamedReference { name: "RightTriangle;", codepoints: [0x22B3, 0x0000] },
    NamedReference { name: "RightTriangleBar;", codepoints: [0x29D0, 0x0000] },
    NamedReference { name: "RightTriangleEqual;", codepoints: [0x22B5, 0x0000] },
    NamedReference { name: "RightUpDownVector;", codepoints: [0x294F, 0x0000] },
    NamedReference { name: "RightUpTeeVector;", codepoints: [0x295C, 0x0000] },
    NamedReference { name: "RightUpVector;", codepoints: [0x21BE, 0x0000] },
    NamedReference { name: "RightUpVectorBar;", codepoints: [0x2954, 0x0000] },
    NamedReference { name: "RightVector;", codepoints: [0x21C0, 0x0000] },
    NamedReference { name: "RightVectorBar;", codepoints: [0x2953, 0x0000] },
    NamedReference { name: "Rightarrow;", codepoints: [0x21D2, 0x0000] },
    NamedReference { name: "Ropf;", codepoints: [0x211D, 0x0000] },
    NamedReference { name: "RoundImplies;", codepoints: [0x2970, 0x0000] },
    NamedReference { name: "Rrightarrow;", codepoints: [0x21DB, 0x0000] },
    NamedReference { name: "Rscr;", codepoints: [0x211B, 0x0000] },
    NamedReference { name: "Rsh;", codepoints: [0x21B1, 0x0000] },
    NamedReference { name: "RuleDelayed;", codepoints: [0x29F4, 0x0000] },
    NamedReference { name: "SHCHcy;", codepoints: [0x0429, 0x0000] },
    NamedReference { name: "SHcy;", codepoints: [0x0428, 0x0000] },
    NamedReference { name: "SOFTcy;", codepoints: [0x042C, 0x0000] },
    NamedReference { name: "Sacute;", codepoints: [0x015A, 0x0000] },
    NamedReference { name: "Sc;", codepoints: [0x2ABC, 0x0000] },
    NamedReference { name: "Scaron;", codepoints: [0x0160, 0x0000] },
    NamedReference { name: "Scedil;", codepoints: [0x015E, 0x0000] },
    NamedReference { name: "Scirc;", codepoints: [0x015C, 0x0000] },
    NamedReference { name: "Scy;", codepoints: [0x0421, 0x0000] },
    NamedReference { name: "Sfr;", codepoints: [0x1D516, 0x0000] },
    NamedReference { name: "ShortDownArrow;", codepoints: [0x2193, 0x0000] },
    NamedReference { name: "ShortLeftArrow;", codepoints: [0x2190, 0x0000] },
    NamedReference { name: "ShortRightArrow;", codepoints: [0x2192, 0x0000] },
    NamedReference { name: "ShortUpArrow;", codepoints: [0x2191, 0x0000] },
    NamedReference { name: "Sigma;", codepoints: [0x03A3, 0x0000] },
    NamedReference { name: "SmallCircle;", codepoints: [0x2218, 0x0000] },
    NamedReference { name: "Sopf;", codepoints: [0x1D54A, 0x0000] },
    NamedReference { name: "Sqrt;", codepoints: [0x221A, 0x0000] },
    NamedReference { name: "Square;", codepoints: [0x25A1, 0x0000] },
    NamedReference { name: "SquareIntersection;", codepoints: [0x2293, 0x0000] },
    NamedReference { name: "SquareSubset;", codepoints: [0x228F, 0x0000] },
    NamedReference { name: "SquareSubsetEqual;", codepoints: [0x2291, 0x0000] },
    NamedReference { name: "SquareSuperset;", codepoints: [0x2290, 0x0000] },
    NamedReference { name: "SquareSupersetEqual;", codepoints: [0x2292, 0x0000] },
    NamedReference { name: "SquareUnion;", codepoints: [0x2294, 0x0000] },
    NamedReference { name: "Sscr;", codepoints: [0x1D4AE, 0x0000] },
    NamedReference { name: "Star;", codepoints: [0x22C6, 0x0000] },
    NamedReference { name: "Sub;", codepoints: [0x22D0, 0x0000] },
    NamedReference { name: "Subset;", codepoints: [0x22D0, 0x0000] },
    NamedReference { name: "SubsetEqual;", codepoints: [0x2286, 0x0000] },
    NamedReference { name: "Succeeds;", codepoints: [0x227B, 0x0000] },
    NamedReference { name: "SucceedsEqual;", codepoints: [0x2AB0, 0x0000] },
    NamedReference { name: "SucceedsSlantEqual;", codepoints: [0x227D, 0x0000] },
    NamedReference { name: "SucceedsTilde;", codepoints: [0x227F, 0x0000] },
    NamedReference { name: "SuchThat;", codepoints: [0x220B, 0x0000] },
    NamedReference { name: "Sum;", codepoints: [0x2211, 0x0000] },
    NamedReference { name: "Sup;", codepoints: [0x22D1, 0x0000] },
    NamedReference { name: "Superset;", codepoints: [0x2283, 0x0000] },
    NamedReference { name: "SupersetEqual;", codepoints: [0x2287, 0x0000] },
    NamedReference { name: "Supset;", codepoints: [0x22D1, 0x0000] },
    NamedReference { name: "THORN", codepoints: [0x00DE, 0x0000] },
    NamedReference { name: "THORN;", codepoints: [0x00DE, 0x0000] },
    NamedReference { name: "TRADE;", codepoints: [0x2122, 0x0000] },
    NamedReference { name: "TSHcy;", codepoints: [0x040B, 0x0000] },
    NamedReference { name: "TScy;", codepoints: [0x0426, 0x0000] },
    NamedReference { name: "Tab;", codepoints: [0x0009, 0x0000] },
    NamedReference { name: "Tau;", codepoints: [0x03A4, 0x0000] },
    NamedReference { name: "Tcaron;", codepoints: [0x0164, 0x0000] },
    NamedReference { name: "Tcedil;", codepoints: [0x0162, 0x0000] },
    NamedReference { name: "Tcy;", codepoints: [0x0422, 0x0000] },
    NamedReference { name: "Tfr;", codepoints: [0x1D517, 0x0000] },
    NamedReference { name: "Therefore;", codepoints: [0x2234, 0x0000] },
    NamedReference { name: "Theta;", codepoints: [0x0398, 0x0000] },
    NamedReference { name: "ThickSpace;", codepoints: [0x205F, 0x200A] },
    NamedReference { name: "ThinSpace;", codepoints: [0x2009, 0x0000] },
    NamedReference { name: "Tilde;", codepoints: [0x223C, 0x0000] },
    NamedReference { name: "TildeEqual;", codepoints: [0x2243, 0x0000] },
    NamedReference { name: "TildeFullEqual;", codepoints: [0x2245, 0x0000] },
    NamedReference { name: "TildeTilde;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "Topf;", codepoints: [0x1D54B, 0x0000] },
    NamedReference { name: "TripleDot;", codepoints: [0x20DB, 0x0000] },
    NamedReference { name: "Tscr;", codepoints: [0x1D4AF, 0x0000] },
    NamedReference { name: "Tstrok;", codepoints: [0x0166, 0x0000] },
    NamedReference { name: "Uacute", codepoints: [0x00DA, 0x0000] },
    NamedReference { name: "Uacute;", codepoints: [0x00DA, 0x0000] },
    NamedReference { name: "Uarr;", codepoints: [0x219F, 0x0000] },
    NamedReference { name: "Uarrocir;", codepoints: [0x2949, 0x0000] },
    NamedReference { name: "Ubrcy;", codepoints: [0x040E, 0x0000] },
    NamedReference { name: "Ubreve;", codepoints: [0x016C, 0x0000] },
    NamedReference { name: "Ucirc", codepoints: [0x00DB, 0x0000] },
    NamedReference { name: "Ucirc;", codepoints: [0x00DB, 0x0000] },
    NamedReference { name: "Ucy;", codepoints: [0x0423, 0x0000] },
    NamedReference { name: "Udblac;", codepoints: [0x0170, 0x0000] },
    NamedReference { name: "Ufr;", codepoints: [0x1D518, 0x0000] },
    NamedReference { name: "Ugrave", codepoints: [0x00D9, 0x0000] },
    NamedReference { name: "Ugrave;", codepoints: [0x00D9, 0x0000] },
    NamedReference { name: "Umacr;", codepoints: [0x016A, 0x0000] },
    NamedReference { name: "UnderBar;", codepoints: [0x005F, 0x0000] },
    NamedReference { name: "UnderBrace;", codepoints: [0x23DF, 0x0000] },
    NamedReference { name: "UnderBracket;", codepoints: [0x23B5, 0x0000] },
    NamedReference { name: "UnderParenthesis;", codepoints: [0x23DD, 0x0000] },
    NamedReference { name: "Union;", codepoints: [0x22C3, 0x0000] },
    NamedReference { name: "UnionPlus;", codepoints: [0x228E, 0x0000] },
    NamedReference { name: "Uogon;", codepoints: [0x0172, 0x0000] },
    NamedReference { name: "Uopf;", codepoints: [0x1D54C, 0x0000] },
    NamedReference { name: "UpArrow;", codepoints: [0x2191, 0x0000] },
    NamedReference { name: "UpArrowBar;", codepoints: [0x2912, 0x0000] },
    NamedReference { name: "UpArrowDownArrow;", codepoints: [0x21C5, 0x0000] },
    NamedReference { name: "UpDownArrow;", codepoints: [0x2195, 0x0000] },
    NamedReference { name: "UpEquilibrium;", codepoints: [0x296E, 0x0000] },
    NamedReference { name: "UpTee;", codepoints: [0x22A5, 0x0000] },
    NamedReference { name: "UpTeeArrow;", codepoints: [0x21A5, 0x0000] },
    NamedReference { name: "Uparrow;", codepoints: [0x21D1, 0x0000] },
    NamedReference { name: "Updownarrow;", codepoints: [0x21D5, 0x0000] },
    NamedReference { name: "UpperLeftArrow;", codepoints: [0x2196, 0x0000] },
    NamedReference { name: "UpperRightArrow;", codepoints: [0x2197, 0x0000] },
    NamedReference { name: "Upsi;", codepoints: [0x03D2, 0x0000] },
    NamedReference { name: "Upsilon;", codepoints: [0x03A5, 0x0000] },
    NamedReference { name: "Uring;", codepoints: [0x016E, 0x0000] },
    NamedReference { name: "Uscr;", codepoints: [0x1D4B0, 0x0000] },
    NamedReference { name: "Utilde;", codepoints: [0x0168, 0x0000] },
    NamedReference { name: "Uuml", codepoints: [0x00DC, 0x0000] },
    NamedReference { name: "Uuml;", codepoints: [0x00DC, 0x0000] },
    NamedReference { name: "VDash;", codepoints: [0x22AB, 0x0000] },
    NamedReference { name: "Vbar;", codepoints: [0x2AEB, 0x0000] },
    NamedReference { name: "Vcy;", codepoints: [0x0412, 0x0000] },
    NamedReference { name: "Vdash;", codepoints: [0x22A9, 0x0000] },
    NamedReference { name: "Vdashl;", codepoints: [0x2AE6, 0x0000] },
    NamedReference { name: "Vee;", codepoints: [0x22C1, 0x0000] },
    NamedReference { name: "Verbar;", codepoints: [0x2016, 0x0000] },
    NamedReference { name: "Vert;", codepoints: [0x2016, 0x0000] },
    NamedReference { name: "VerticalBar;", codepoints: [0x2223, 0x0000] },
    NamedReference { name: "VerticalLine;", codepoints: [0x007C, 0x0000] },
    NamedReference { name: "VerticalSeparator;", codepoints: [0x2758, 0x0000] },
    NamedReference { name: "VerticalTilde;", codepoints: [0x2240, 0x0000] },
    NamedReference { name: "VeryThinSpace;", codepoints: [0x200A, 0x0000] },
    NamedReference { name: "Vfr;", codepoints: [0x1D519, 0x0000] },
    NamedReference { name: "Vopf;", codepoints: [0x1D54D, 0x0000] },
    NamedReference { name: "Vscr;", codepoints: [0x1D4B1, 0x0000] },
    NamedReference { name: "Vvdash;", codepoints: [0x22AA, 0x0000] },
    NamedReference { name: "Wcirc;", codepoints: [0x0174, 0x0000] },
    NamedReference { name: "Wedge;", codepoints: [0x22C0, 0x0000] },
    NamedReference { name: "Wfr;", codepoints: [0x1D51A, 0x0000] },
    NamedReference { name: "Wopf;", codepoints: [0x1D54E, 0x0000] },
    NamedReference { name: "Wscr;", codepoints: [0x1D4B2, 0x0000] },
    NamedReference { name: "Xfr;", codepoints: [0x1D51B, 0x0000] },
    NamedReference { name: "Xi;", codepoints: [0x039E, 0x0000] },
    NamedReference { name: "Xopf;", codepoints: [0x1D54F, 0x0000] },
    NamedReference { name: "Xscr;", codepoints: [0x1D4B3, 0x0000] },
    NamedReference { name: "YAcy;", codepoints: [0x042F, 0x0000] },
    NamedReference { name: "YIcy;", codepoints: [0x0407, 0x0000] },
    NamedReference { name: "YUcy;", codepoints: [0x042E, 0x0000] },
    NamedReference { name: "Yacute", codepoints: [0x00DD, 0x0000] },
    NamedReference { name: "Yacute;", codepoints: [0x00DD, 0x0000] },
    NamedReference { name: "Ycirc;", codepoints: [0x0176, 0x0000] },
    NamedReference { name: "Ycy;", codepoints: [0x042B, 0x0000] },
    NamedReference { name: "Yfr;", codepoints: [0x1D51C, 0x0000] },
    NamedReference { name: "Yopf;", codepoints: [0x1D550, 0x0000] },
    NamedReference { name: "Yscr;", codepoints: [0x1D4B4, 0x0000] },
    NamedReference { name: "Yuml;", codepoints: [0x0178, 0x0000] },
    NamedReference { name: "ZHcy;", codepoints: [0x0416, 0x0000] },
    NamedReference { name: "Zacute;", codepoints: [0x0179, 0x0000] },
    NamedReference { name: "Zcaron;", codepoints: [0x017D, 0x0000] },
    NamedReference { name: "Zcy;", codepoints: [0x0417, 0x0000] },
    NamedReference { name: "Zdot;", codepoints: [0x017B, 0x0000] },
    NamedReference { name: "ZeroWidthSpace;", codepoints: [0x200B, 0x0000] },
    NamedReference { name: "Zeta;", codepoints: [0x0396, 0x0000] },
    NamedReference { name: "Zfr;", codepoints: [0x2128, 0x0000] },
    NamedReference { name: "Zopf;", codepoints: [0x2124, 0x0000] },
    NamedReference { name: "Zscr;", codepoints: [0x1D4B5, 0x0000] },
    NamedReference { name: "aacute", codepoints: [0x00E1, 0x0000] },
    NamedReference { name: "aacute;", codepoints: [0x00E1, 0x0000] },
    NamedReference { name: "abreve;", codepoints: [0x0103, 0x0000] },
    NamedReference { name: "ac;", codepoints: [0x223E, 0x0000] },
    NamedReference { name: "acE;", codepoints: [0x223E, 0x0333] },
    NamedReference { name: "acd;", codepoints: [0x223F, 0x0000] },
    NamedReference { name: "acirc", codepoints: [0x00E2, 0x0000] },
    NamedReference { name: "acirc;", codepoints: [0x00E2, 0x0000] },
    NamedReference { name: "acute", codepoints: [0x00B4, 0x0000] },
    NamedReference { name: "acute;", codepoints: [0x00B4, 0x0000] },
    NamedReference { name: "acy;", codepoints: [0x0430, 0x0000] },
    NamedReference { name: "aelig", codepoints: [0x00E6, 0x0000] },
    NamedReference { name: "aelig;", codepoints: [0x00E6, 0x0000] },
    NamedReference { name: "af;", codepoints: [0x2061, 0x0000] },
    NamedReference { name: "afr;", codepoints: [0x1D51E, 0x0000] },
    NamedReference { name: "agrave", codepoints: [0x00E0, 0x0000] },
    NamedReference { name: "agrave;", codepoints: [0x00E0, 0x0000] },
    NamedReference { name: "alefsym;", codepoints: [0x2135, 0x0000] },
    NamedReference { name: "aleph;", codepoints: [0x2135, 0x0000] },
    NamedReference { name: "alpha;", codepoints: [0x03B1, 0x0000] },
    NamedReference { name: "amacr;", codepoints: [0x0101, 0x0000] },
    NamedReference { name: "amalg;", codepoints: [0x2A3F, 0x0000] },
    NamedReference { name: "amp", codepoints: [0x0026, 0x0000] },
    NamedReference { name: "amp;", codepoints: [0x0026, 0x0000] },
    NamedReference { name: "and;", codepoints: [0x2227, 0x0000] },
    NamedReference { name: "andand;", codepoints: [0x2A55, 0x0000] },
    NamedReference { name: "andd;", codepoints: [0x2A5C, 0x0000] },
    NamedReference { name: "andslope;", codepoints: [0x2A58, 0x0000] },
    NamedReference { name: "andv;", codepoints: [0x2A5A, 0x0000] },
    NamedReference { name: "ang;", codepoints: [0x2220, 0x0000] },
    NamedReference { name: "ange;", codepoints: [0x29A4, 0x0000] },
    NamedReference { name: "angle;", codepoints: [0x2220, 0x0000] },
    NamedReference { name: "angmsd;", codepoints: [0x2221, 0x0000] },
    NamedReference { name: "angmsdaa;", codepoints: [0x29A8, 0x0000] },
    NamedReference { name: "angmsdab;", codepoints: [0x29A9, 0x0000] },
    NamedReference { name: "angmsdac;", codepoints: [0x29AA, 0x0000] },
    NamedReference { name: "angmsdad;", codepoints: [0x29AB, 0x0000] },
    NamedReference { name: "angmsdae;", codepoints: [0x29AC, 0x0000] },
    NamedReference { name: "angmsdaf;", codepoints: [0x29AD, 0x0000] },
    NamedReference { name: "angmsdag;", codepoints: [0x29AE, 0x0000] },
    NamedReference { name: "angmsdah;", codepoints: [0x29AF, 0x0000] },
    NamedReference { name: "angrt;", codepoints: [0x221F, 0x0000] },
    NamedReference { name: "angrtvb;", codepoints: [0x22BE, 0x0000] },
    NamedReference { name: "angrtvbd;", codepoints: [0x299D, 0x0000] },
    NamedReference { name: "angsph;", codepoints: [0x2222, 0x0000] },
    NamedReference { name: "angst;", codepoints: [0x00C5, 0x0000] },
    NamedReference { name: "angzarr;", codepoints: [0x237C, 0x0000] },
    NamedReference { name: "aogon;", codepoints: [0x0105, 0x0000] },
    NamedReference { name: "aopf;", codepoints: [0x1D552, 0x0000] },
    NamedReference { name: "ap;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "apE;", codepoints: [0x2A70, 0x0000] },
    NamedReference { name: "apacir;", codepoints: [0x2A6F, 0x0000] },
    NamedReference { name: "ape;", codepoints: [0x224A, 0x0000] },
    NamedReference { name: "apid;", codepoints: [0x224B, 0x0000] },
    NamedReference { name: "apos;", codepoints: [0x0027, 0x0000] },
    NamedReference { name: "approx;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "approxeq;", codepoints: [0x224A, 0x0000] },
    NamedReference { name: "aring", codepoints: [0x00E5, 0x0000] },
    NamedReference { name: "aring;", codepoints: [0x00E5, 0x0000] },
    NamedReference { name: "ascr;", codepoints: [0x1D4B6, 0x0000] },
    NamedReference { name: "ast;", codepoints: [0x002A, 0x0000] },
    NamedReference { name: "asymp;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "asympeq;", codepoints: [0x224D, 0x0000] },
    NamedReference { name: "atilde", codepoints: [0x00E3, 0x0000] },
    NamedReference { name: "atilde;", codepoints: [0x00E3, 0x0000] },
    NamedReference { name: "auml", codepoints: [0x00E4, 0x0000] },
    NamedReference { name: "auml;", codepoints: [0x00E4, 0x0000] },
    NamedReference { name: "awconint;", codepoints: [0x2233, 0x0000] },
    NamedReference { name: "awint;", codepoints: [0x2A11, 0x0000] },
    NamedReference { name: "bNot;", codepoints: [0x2AED, 0x0000] },
    NamedReference { name: "backcong;", codepoints: [0x224C, 0x0000] },
    NamedReference { name: "backepsilon;", codepoints: [0x03F6, 0x0000] },
    NamedReference { name: "backprime;", codepoints: [0x2035, 0x0000] },
    NamedReference { name: "backsim;", codepoints: [0x223D, 0x0000] },
    NamedReference { name: "backsimeq;", codepoints: [0x22CD, 0x0000] },
    NamedReference { name: "barvee;", codepoints: [0x22BD, 0x0000] },
    NamedReference { name: "barwed;", codepoints: [0x2305, 0x0000] },
    NamedReference { name: "barwedge;", codepoints: [0x2305, 0x0000] },
    NamedReference { name: "bbrk;", codepoints: [0x23B5, 0x0000] },
    NamedReference { name: "bbrktbrk;", codepoints: [0x23B6, 0x0000] },
    NamedReference { name: "bcong;", codepoints: [0x224C, 0x0000] },
    NamedReference { name: "bcy;", codepoints: [0x0431, 0x0000] },
    NamedReference { name: "bdquo;", codepoints: [0x201E, 0x0000] },
    NamedReference { name: "becaus;", codepoints: [0x2235, 0x0000] },
    NamedReference { name: "because;", codepoints: [0x2235, 0x0000] },
    NamedReference { name: "bemptyv;", codepoints: [0x29B0, 0x0000] },
    NamedReference { name: "bepsi;", codepoints: [0x03F6, 0x0000] },
    NamedReference { name: "bernou;", codepoints: [0x212C, 0x0000] },
    NamedReference { name: "beta;", codepoints: [0x03B2, 0x0000] },
    NamedReference { name: "beth;", codepoints: [0x2136, 0x0000] },
    NamedReference { name: "between;", codepoints: [0x226C, 0x0000] },
    NamedReference { name: "bfr;", codepoints: [0x1D51F, 0x0000] },
    NamedReference { name: "bigcap;", codepoints: [0x22C2, 0x0000] },
    NamedReference { name: "bigcirc;", codepoints: [0x25EF, 0x0000] },
    NamedReference { name: "bigcup;", codepoints: [0x22C3, 0x0000] },
    NamedReference { name: "bigodot;", codepoints: [0x2A00, 0x0000] },
    NamedReference { name: "bigoplus;", codepoints: [0x2A01, 0x0000] },
    NamedReference { name: "bigotimes;", codepoints: [0x2A02, 0x0000] },
    NamedReference { name: "bigsqcup;", codepoints: [0x2A06, 0x0000] },
    NamedReference { name: "bigstar;", codepoints: [0x2605, 0x0000] },
    NamedReference { name: "bigtriangledown;", codepoints: [0x25BD, 0x0000] },
    NamedReference { name: "bigtriangleup;", codepoints: [0x25B3, 0x0000] },
    NamedReference { name: "biguplus;", codepoints: [0x2A04, 0x0000] },
    NamedReference { name: "bigvee;", codepoints: [0x22C1, 0x0000] },
    NamedReference { name: "bigwedge;", codepoints: [0x22C0, 0x0000] },
    NamedReference { name: "bkarow;", codepoints: [0x290D, 0x0000] },
    NamedReference { name: "blacklozenge;", codepoints: [0x29EB, 0x0000] },
    NamedReference { name: "blacksquare;", codepoints: [0x25AA, 0x0000] },
    NamedReference { name: "blacktriangle;", codepoints: [0x25B4, 0x0000] },
    NamedReference { name: "blacktriangledown;", codepoints: [0x25BE, 0x0000] },
    NamedReference { name: "blacktriangleleft;", codepoints: [0x25C2, 0x0000] },
    NamedReference { name: "blacktriangleright;", codepoints: [0x25B8, 0x0000] },
    NamedReference { name: "blank;", codepoints: [0x2423, 0x0000] },
    NamedReference { name: "blk12;", codepoints: [0x2592, 0x0000] },
    NamedReference { name: "blk14;", codepoints: [0x2591, 0x0000] },
    NamedReference { name: "blk34;", codepoints: [0x2593, 0x0000] },
    NamedReference { name: "block;", codepoints: [0x2588, 0x0000] },
    NamedReference { name: "bne;", codepoints: [0x003D, 0x20E5] },
    NamedReference { name: "bnequiv;", codepoints: [0x2261, 0x20E5] },
    NamedReference { name: "bnot;", codepoints: [0x2310, 0x0000] },
    NamedReference { name: "bopf;", codepoints: [0x1D553, 0x0000] },
    NamedReference { name: "bot;", codepoints: [0x22A5, 0x0000] },
    NamedReference { name: "bottom;", codepoints: [0x22A5, 0x0000] },
    NamedReference { name: "bowtie;", codepoints: [0x22C8, 0x0000] },
    NamedReference { name: "boxDL;", codepoints: [0x2557, 0x0000] },
    NamedReference { name: "boxDR;", codepoints: [0x2554, 0x0000] },
    NamedReference { name: "boxDl;", codepoints: [0x2556, 0x0000] },
    NamedReference { name: "boxDr;", codepoints: [0x2553, 0x0000] },
    NamedReference { name: "boxH;", codepoints: [0x2550, 0x0000] },
    NamedReference { name: "boxHD;", codepoints: [0x2566, 0x0000] },
    NamedReference { name: "boxHU;", codepoints: [0x2569, 0x0000] },
    NamedReference { name: "boxHd;", codepoints: [0x2564, 0x0000] },
    NamedReference { name: "boxHu;", codepoints: [0x2567, 0x0000] },
    NamedReference { name: "boxUL;", codepoints: [0x255D, 0x0000] },
    NamedReference { name: "boxUR;", codepoints: [0x255A, 0x0000] },
    NamedReference { name: "boxUl;", codepoints: [0x255C, 0x0000] },
    NamedReference { name: "boxUr;", codepoints: [0x2559, 0x0000] },
    NamedReference { name: "boxV;", codepoints: [0x2551, 0x0000] },
    NamedReference { name: "boxVH;", codepoints: [0x256C, 0x0000] },
    NamedReference { name: "boxVL;", codepoints: [0x2563, 0x0000] },
    NamedReference { name: "boxVR;", codepoints: [0x2560, 0x0000] },
    NamedReference { name: "boxVh;", codepoints: [0x256B, 0x0000] },
    NamedReference { name: "boxVl;", codepoints: [0x2562, 0x0000] },
    NamedReference { name: "boxVr;", codepoints: [0x255F, 0x0000] },
    NamedReference { name: "boxbox;", codepoints: [0x29C9, 0x0000] },
    NamedReference { name: "boxdL;", codepoints: [0x2555, 0x0000] },
    NamedReference { name: "boxdR;", codepoints: [0x2552, 0x0000] },
    NamedReference { name: "boxdl;", codepoints: [0x2510, 0x0000] },
    NamedReference { name: "boxdr;", codepoints: [0x250C, 0x0000] },
    NamedReference { name: "boxh;", codepoints: [0x2500, 0x0000] },
    NamedReference { name: "boxhD;", codepoints: [0x2565, 0x0000] },
    NamedReference { name: "boxhU;", codepoints: [0x2568, 0x0000] },
    NamedReference { name: "boxhd;", codepoints: [0x252C, 0x0000] },
    NamedReference { name: "boxhu;", codepoints: [0x2534, 0x0000] },
    NamedReference { name: "boxminus;", codepoints: [0x229F, 0x0000] },
    NamedReference { name: "boxplus;", codepoints: [0x229E, 0x0000] },
    NamedReference { name: "boxtimes;", codepoints: [0x22A0, 0x0000] },
    NamedReference { name: "boxuL;", codepoints: [0x255B, 0x0000] },
    NamedReference { name: "boxuR;", codepoints: [0x2558, 0x0000] },
    NamedReference { name: "boxul;", codepoints: [0x2518, 0x0000] },
    NamedReference { name: "boxur;", codepoints: [0x2514, 0x0000] },
    NamedReference { name: "boxv;", codepoints: [0x2502, 0x0000] },
    NamedReference { name: "boxvH;", codepoints: [0x256A, 0x0000] },
    NamedReference { name: "boxvL;", codepoints: [0x2561, 0x0000] },
    NamedReference { name: "boxvR;", codepoints: [0x255E, 0x0000] },
    NamedReference { name: "boxvh;", codepoints: [0x253C, 0x0000] },
    NamedReference { name: "boxvl;", codepoints: [0x2524, 0x0000] },
    NamedReference { name: "boxvr;", codepoints: [0x251C, 0x0000] },
    NamedReference { name: "bprime;", codepoints: [0x2035, 0x0000] },
    NamedReference { name: "breve;", codepoints: [0x02D8, 0x0000] },
    NamedReference { name: "brvbar", codepoints: [0x00A6, 0x0000] },
    NamedReference { name: "brvbar;", codepoints: [0x00A6, 0x0000] },
    NamedReference { name: "bscr;", codepoints: [0x1D4B7, 0x0000] },
    NamedReference { name: "bsemi;", codepoints: [0x204F, 0x0000] },
    NamedReference { name: "bsim;", codepoints: [0x223D, 0x0000] },
    NamedReference { name: "bsime;", codepoints: [0x22CD, 0x0000] },
    NamedReference { name: "bsol;", codepoints: [0x005C, 0x0000] },
    NamedReference { name: "bsolb;", codepoints: [0x29C5, 0x0000] },
    NamedReference { name: "bsolhsub;", codepoints: [0x27C8, 0x0000] },
    NamedReference { name: "bull;", codepoints: [0x2022, 0x0000] },
    NamedReference { name: "bullet;", codepoints: [0x2022, 0x0000] },
    NamedReference { name: "bump;", codepoints: [0x224E, 0x0000] },
    NamedReference { name: "bumpE;", codepoints: [0x2AAE, 0x0000] },
    NamedReference { name: "bumpe;", codepoints: [0x224F, 0x0000] },
    NamedReference { name: "bumpeq;", codepoints: [0x224F, 0x0000] },
    NamedReference { name: "cacute;", codepoints: [0x0107, 0x0000] },
    NamedReference { name: "cap;", codepoints: [0x2229, 0x0000] },
    NamedReference { name: "capand;", codepoints: [0x2A44, 0x0000] },
    NamedReference { name: "capbrcup;", codepoints: [0x2A49, 0x0000] },
    NamedReference { name: "capcap;", codepoints: [0x2A4B, 0x0000] },
    NamedReference { name: "capcup;", codepoints: [0x2A47, 0x0000] },
    NamedReference { name: "capdot;", codepoints: [0x2A40, 0x0000] },
    NamedReference { name: "caps;", codepoints: [0x2229, 0xFE00] },
    NamedReference { name: "caret;", codepoints: [0x2041, 0x0000] },
    NamedReference { name: "caron;", codepoints: [0x02C7, 0x0000] },
    NamedReference { name: "ccaps;", codepoints: [0x2A4D, 0x0000] },
    NamedReference { name: "ccaron;", codepoints: [0x010D, 0x0000] },
    NamedReference { name: "ccedil", codepoints: [0x00E7, 0x0000] },
    NamedReference { name: "ccedil;", codepoints: [0x00E7, 0x0000] },
    NamedReference { name: "ccirc;", codepoints: [0x0109, 0x0000] },
    NamedReference { name: "ccups;", codepoints: [0x2A4C, 0x0000] },
    NamedReference { name: "ccupssm;", codepoints: [0x2A50, 0x0000] },
    NamedReference { name: "cdot;", codepoints: [0x010B, 0x0000] },
    NamedReference { name: "cedil", codepoints: [0x00B8, 0x0000] },
    NamedReference { name: "cedil;", codepoints: [0x00B8, 0x0000] },
    NamedReference { name: "cemptyv;", codepoints: [0x29B2, 0x0000] },
    NamedReference { name: "cent", codepoints: [0x00A2, 0x0000] },
    NamedReference { name: "cent;", codepoints: [0x00A2, 0x0000] },
    NamedReference { name: "centerdot;", codepoints: [0x00B7, 0x0000] },
    NamedReference { name: "cfr;", codepoints: [0x1D520, 0x0000] },
    NamedReference { name: "chcy;", codepoints: [0x0447, 0x0000] },
    NamedReference { name: "check;", codepoints: [0x2713, 0x0000] },
    NamedReference { name: "checkmark;", codepoints: [0x2713, 0x0000] },
    NamedReference { name: "chi;", codepoints: [0x03C7, 0x0000] },
    NamedReference { name: "cir;", codepoints: [0x25CB, 0x0000] },
    NamedReference { name: "cirE;", codepoints: [0x29C3, 0x0000] },
    NamedReference { name: "circ;", codepoints: [0x02C6, 0x0000] },
    NamedReference { name: "circeq;", codepoints: [0x2257, 0x0000] },
    NamedReference { name: "circlearrowleft;", codepoints: [0x21BA, 0x0000] },
    NamedReference { name: "circlearrowright;", codepoints: [0x21BB, 0x0000] },
    NamedReference { name: "circledR;", codepoints: [0x00AE, 0x0000] },
    NamedReference { name: "circledS;", codepoints: [0x24C8, 0x0000] },
    NamedReference { name: "circledast;", codepoints: [0x229B, 0x0000] },
    NamedReference { name: "circledcirc;", codepoints: [0x229A, 0x0000] },
    NamedReference { name: "circleddash;", codepoints: [0x229D, 0x0000] },
    NamedReference { name: "cire;", codepoints: [0x2257, 0x0000] },
    NamedReference { name: "cirfnint;", codepoints: [0x2A10, 0x0000] },
    NamedReference { name: "cirmid;", codepoints: [0x2AEF, 0x0000] },
    NamedReference { name: "cirscir;", codepoints: [0x29C2, 0x0000] },
    NamedReference { name: "clubs;", codepoints: [0x2663, 0x0000] },
    NamedReference { name: "clubsuit;", codepoints: [0x2663, 0x0000] },
    NamedReference { name: "colon;", codepoints: [0x003A, 0x0000] },
    NamedReference { name: "colone;", codepoints: [0x2254, 0x0000] },
    NamedReference { name: "coloneq;", codepoints: [0x2254, 0x0000] },
    NamedReference { name: "comma;", codepoints: [0x002C, 0x0000] },
    NamedReference { name: "commat;", codepoints: [0x0040, 0x0000] },
    NamedReference { name: "comp;", codepoints: [0x2201, 0x0000] },
    NamedReference { name: "compfn;", codepoints: [0x2218, 0x0000] },
    NamedReference { name: "complement;", codepoints: [0x2201, 0x0000] },
    NamedReference { name: "complexes;", codepoints: [0x2102, 0x0000] },
    NamedReference { name: "cong;", codepoints: [0x2245, 0x0000] },
    NamedReference { name: "congdot;", codepoints: [0x2A6D, 0x0000] },
    NamedReference { name: "conint;", codepoints: [0x222E, 0x0000] },
    NamedReference { name: "copf;", codepoints: [0x1D554, 0x0000] },
    NamedReference { name: "coprod;", codepoints: [0x2210, 0x0000] },
    NamedReference { name: "copy", codepoints: [0x00A9, 0x0000] },
    NamedReference { name: "copy;", codepoints: [0x00A9, 0x0000] },
    NamedReference { name: "copysr;", codepoints: [0x2117, 0x0000] },
    NamedReference { name: "crarr;", codepoints: [0x21B5, 0x0000] },
    NamedReference { name: "cross;", codepoints: [0x2717, 0x0000] },
    NamedReference { name: "cscr;", codepoints: [0x1D4B8, 0x0000] },
    NamedReference { name: "csub;", codepoints: [0x2ACF, 0x0000] },
    NamedReference { name: "csube;", codepoints: [0x2AD1, 0x0000] },
    NamedReference { name: "csup;", codepoints: [0x2AD0, 0x0000] },
    NamedReference { name: "csupe;", codepoints: [0x2AD2, 0x0000] },
    NamedReference { name: "ctdot;", codepoints: [0x22EF, 0x0000] },
    NamedReference { name: "cudarrl;", codepoints: [0x2938, 0x0000] },
    NamedReference { name: "cudarrr;", codepoints: [0x2935, 0x0000] },
    NamedReference { name: "cuepr;", codepoints: [0x22DE, 0x0000] },
    NamedReference { name: "cuesc;", codepoints: [0x22DF, 0x0000] },
    NamedReference { name: "cularr;", codepoints: [0x21B6, 0x0000] },
    NamedReference { name: "cularrp;", codepoints: [0x293D, 0x0000] },
    NamedReference { name: "cup;", codepoints: [0x222A, 0x0000] },
    NamedReference { name: "cupbrcap;", codepoints: [0x2A48, 0x0000] },
    NamedReference { name: "cupcap;", codepoints: [0x2A46, 0x0000] },
    NamedReference { name: "cupcup;", codepoints: [0x2A4A, 0x0000] },
    NamedReference { name: "cupdot;", codepoints: [0x228D, 0x0000] },
    NamedReference { name: "cupor;", codepoints: [0x2A45, 0x0000] },
    NamedReference { name: "cups;", codepoints: [0x222A, 0xFE00] },
    NamedReference { name: "curarr;", codepoints: [0x21B7, 0x0000] },
    NamedReference { name: "curarrm;", codepoints: [0x293C, 0x0000] },
    NamedReference { name: "curlyeqprec;", codepoints: [0x22DE, 0x0000] },
    NamedReference { name: "curlyeqsucc;", codepoints: [0x22DF, 0x0000] },
    NamedReference { name: "curlyvee;", codepoints: [0x22CE, 0x0000] },
    NamedReference { name: "curlywedge;", codepoints: [0x22CF, 0x0000] },
    NamedReference { name: "curren", codepoints: [0x00A4, 0x0000] },
    NamedReference { name: "curren;", codepoints: [0x00A4, 0x0000] },
    NamedReference { name: "curvearrowleft;", codepoints: [0x21B6, 0x0000] },
    NamedReference { name: "curvearrowright;", codepoints: [0x21B7, 0x0000] },
    NamedReference { name: "cuvee;", codepoints: [0x22CE, 0x0000] },
    NamedReference { name: "cuwed;", codepoints: [0x22CF, 0x0000] },
    NamedReference { name: "cwconint;", codepoints: [0x2232, 0x0000] },
    NamedReference { name: "cwint;", codepoints: [0x2231, 0x0000] },
    NamedReference { name: "cylcty;", codepoints: [0x232D, 0x0000] },
    NamedReference { name: "dArr;", codepoints: [0x21D3, 0x0000] },
    NamedReference { name: "dHar;", codepoints: [0x2965, 0x0000] },
    NamedReference { name: "dagger;", codepoints: [0x2020, 0x0000] },
    NamedReference { name: "daleth;", codepoints: [0x2138, 0x0000] },
    NamedReference { name: "darr;", codepoints: [0x2193, 0x0000] },
    NamedReference { name: "dash;", codepoints: [0x2010, 0x0000] },
    NamedReference { name: "dashv;", codepoints: [0x22A3, 0x0000] },
    NamedReference { name: "dbkarow;", codepoints: [0x290F, 0x0000] },
    NamedReference { name: "dblac;", codepoints: [0x02DD, 0x0000] },
    NamedReference { name: "dcaron;", codepoints: [0x010F, 0x0000] },
    NamedReference { name: "dcy;", codepoints: [0x0434, 0x0000] },
    NamedReference { name: "dd;", codepoints: [0x2146, 0x0000] },
    NamedReference { name: "ddagger;", codepoints: [0x2021, 0x0000] },
    NamedReference { name: "ddarr;", codepoints: [0x21CA, 0x0000] },
    NamedReference { name: "ddotseq;", codepoints: [0x2A77, 0x0000] },
    NamedReference { name: "deg", codepoints: [0x00B0, 0x0000] },
    NamedReference { name: "deg;", codepoints: [0x00B0, 0x0000] },
    NamedReference { name: "delta;", codepoints: [0x03B4, 0x0000] },
    NamedReference { name: "demptyv;", codepoints: [0x29B1, 0x0000] },
    NamedReference { name: "dfisht;", codepoints: [0x297F, 0x0000] },
    NamedReference { name: "dfr;", codepoints: [0x1D521, 0x0000] },
    NamedReference { name: "dharl;", codepoints: [0x21C3, 0x0000] },
    NamedReference { name: "dharr;", codepoints: [0x21C2, 0x0000] },
    NamedReference { name: "diam;", codepoints: [0x22C4, 0x0000] },
    NamedReference { name: "diamond;", codepoints: [0x22C4, 0x0000] },
    NamedReference { name: "diamondsuit;", codepoints: [0x2666, 0x0000] },
    NamedReference { name: "diams;", codepoints: [0x2666, 0x0000] },
    NamedReference { name: "die;", codepoints: [0x00A8, 0x0000] },
    NamedReference { name: "digamma;", codepoints: [0x03DD, 0x0000] },
    NamedReference { name: "disin;", codepoints: [0x22F2, 0x0000] },
    NamedReference { name: "div;", codepoints: [0x00F7, 0x0000] },
    NamedReference { name: "divide", codepoints: [0x00F7, 0x0000] },
    NamedReference { name: "divide;", codepoints: [0x00F7, 0x0000] },
    NamedReference { name: "divideontimes;", codepoints: [0x22C7, 0x0000] },
    NamedReference { name: "divonx;", codepoints: [0x22C7, 0x0000] },
    NamedReference { name: "djcy;", codepoints: [0x0452, 0x0000] },
    NamedReference { name: "dlcorn;", codepoints: [0x231E, 0x0000] },
    NamedReference { name: "dlcrop;", codepoints: [0x230D, 0x0000] },
    NamedReference { name: "dollar;", codepoints: [0x0024, 0x0000] },
    NamedReference { name: "dopf;", codepoints: [0x1D555, 0x0000] },
    NamedReference { name: "dot;", codepoints: [0x02D9, 0x0000] },
    NamedReference { name: "doteq;", codepoints: [0x2250, 0x0000] },
    NamedReference { name: "doteqdot;", codepoints: [0x2251, 0x0000] },
    NamedReference { name: "dotminus;", codepoints: [0x2238, 0x0000] },
    NamedReference { name: "dotplus;", codepoints: [0x2214, 0x0000] },
    NamedReference { name: "dotsquare;", codepoints: [0x22A1, 0x0000] },
    NamedReference { name: "doublebarwedge;", codepoints: [0x2306, 0x0000] },
    NamedReference { name: "downarrow;", codepoints: [0x2193, 0x0000] },
    NamedReference { name: "downdownarrows;", codepoints: [0x21CA, 0x0000] },
    NamedReference { name: "downharpoonleft;", codepoints: [0x21C3, 0x0000] },
    NamedReference { name: "downharpoonright;", codepoints: [0x21C2, 0x0000] },
    NamedReference { name: "drbkarow;", codepoints: [0x2910, 0x0000] },
    NamedReference { name: "drcorn;", codepoints: [0x231F, 0x0000] },
    NamedReference { name: "drcrop;", codepoints: [0x230C, 0x0000] },
    NamedReference { name: "dscr;", codepoints: [0x1D4B9, 0x0000] },
    NamedReference { name: "dscy;", codepoints: [0x0455, 0x0000] },
    NamedReference { name: "dsol;", codepoints: [0x29F6, 0x0000] },
    NamedReference { name: "dstrok;", codepoints: [0x0111, 0x0000] },
    NamedReference { name: "dtdot;", codepoints: [0x22F1, 0x0000] },
    NamedReference { name: "dtri;", codepoints: [0x25BF, 0x0000] },
    NamedReference { name: "dtrif;", codepoints: [0x25BE, 0x0000] },
    NamedReference { name: "duarr;", codepoints: [0x21F5, 0x0000] },
    NamedReference { name: "duhar;", codepoints: [0x296F, 0x0000] },
    NamedReference { name: "dwangle;", codepoints: [0x29A6, 0x0000] },
    NamedReference { name: "dzcy;", codepoints: [0x045F, 0x0000] },
    NamedReference { name: "dzigrarr;", codepoints: [0x27FF, 0x0000] },
    NamedReference { name: "eDDot;", codepoints: [0x2A77, 0x0000] },
    NamedReference { name: "eDot;", codepoints: [0x2251, 0x0000] },
    NamedReference { name: "eacute", codepoints: [0x00E9, 0x0000] },
    NamedReference { name: "eacute;", codepoints: [0x00E9, 0x0000] },
    NamedReference { name: "easter;", codepoints: [0x2A6E, 0x0000] },
    NamedReference { name: "ecaron;", codepoints: [0x011B, 0x0000] },
    NamedReference { name: "ecir;", codepoints: [0x2256, 0x0000] },
    NamedReference { name: "ecirc", codepoints: [0x00EA, 0x0000] },
    NamedReference { name: "ecirc;", codepoints: [0x00EA, 0x0000] },
    NamedReference { name: "ecolon;", codepoints: [0x2255, 0x0000] },
    NamedReference { name: "ecy;", codepoints: [0x044D, 0x0000] },
    NamedReference { name: "edot;", codepoints: [0x0117, 0x0000] },
    NamedReference { name: "ee;", codepoints: [0x2147, 0x0000] },
    NamedReference { name: "efDot;", codepoints: [0x2252, 0x0000] },
    NamedReference { name: "efr;", codepoints: [0x1D522, 0x0000] },
    NamedReference { name: "eg;", codepoints: [0x2A9A, 0x0000] },
    NamedReference { name: "egrave", codepoints: [0x00E8, 0x0000] },
    NamedReference { name: "egrave;", codepoints: [0x00E8, 0x0000] },
    NamedReference { name: "egs;", codepoints: [0x2A96, 0x0000] },
    NamedReference { name: "egsdot;", codepoints: [0x2A98, 0x0000] },
    NamedReference { name: "el;", codepoints: [0x2A99, 0x0000] },
    NamedReference { name: "elinters;", codepoints: [0x23E7, 0x0000] },
    NamedReference { name: "ell;", codepoints: [0x2113, 0x0000] },
    NamedReference { name: "els;", codepoints: [0x2A95, 0x0000] },
    NamedReference { name: "elsdot;", codepoints: [0x2A97, 0x0000] },
    NamedReference { name: "emacr;", codepoints: [0x0113, 0x0000] },
    NamedReference { name: "empty;", codepoints: [0x2205, 0x0000] },
    NamedReference { name: "emptyset;", codepoints: [0x2205, 0x0000] },
    NamedReference { name: "emptyv;", codepoints: [0x2205, 0x0000] },
    NamedReference { name: "emsp13;", codepoints: [0x2004, 0x0000] },
    NamedReference { name: "emsp14;", codepoints: [0x2005, 0x0000] },
    NamedReference { name: "emsp;", codepoints: [0x2003, 0x0000] },
    NamedReference { name: "eng;", codepoints: [0x014B, 0x0000] },
    NamedReference { name: "ensp;", codepoints: [0x2002, 0x0000] },
    NamedReference { name: "eogon;", codepoints: [0x0119, 0x0000] },
    NamedReference { name: "eopf;", codepoints: [0x1D556, 0x0000] },
    NamedReference { name: "epar;", codepoints: [0x22D5, 0x0000] },
    NamedReference { name: "eparsl;", codepoints: [0x29E3, 0x0000] },
    NamedReference { name: "eplus;", codepoints: [0x2A71, 0x0000] },
    NamedReference { name: "epsi;", codepoints: [0x03B5, 0x0000] },
    NamedReference { name: "epsilon;", codepoints: [0x03B5, 0x0000] },
    NamedReference { name: "epsiv;", codepoints: [0x03F5, 0x0000] },
    NamedReference { name: "eqcirc;", codepoints: [0x2256, 0x0000] },
    NamedReference { name: "eqcolon;", codepoints: [0x2255, 0x0000] },
    NamedReference { name: "eqsim;", codepoints: [0x2242, 0x0000] },
    NamedReference { name: "eqslantgtr;", codepoints: [0x2A96, 0x0000] },
    NamedReference { name: "eqslantless;", codepoints: [0x2A95, 0x0000] },
    NamedReference { name: "equals;", codepoints: [0x003D, 0x0000] },
    NamedReference { name: "equest;", codepoints: [0x225F, 0x0000] },
    NamedReference { name: "equiv;", codepoints: [0x2261, 0x0000] },
    NamedReference { name: "equivDD;", codepoints: [0x2A78, 0x0000] },
    NamedReference { name: "eqvparsl;", codepoints: [0x29E5, 0x0000] },
    NamedReference { name: "erDot;", codepoints: [0x2253, 0x0000] },
    NamedReference { name: "erarr;", codepoints: [0x2971, 0x0000] },
    NamedReference { name: "escr;", codepoints: [0x212F, 0x0000] },
    NamedReference { name: "esdot;", codepoints: [0x2250, 0x0000] },
    NamedReference { name: "esim;", codepoints: [0x2242, 0x0000] },
    NamedReference { name: "eta;", codepoints: [0x03B7, 0x0000] },
    NamedReference { name: "eth", codepoints: [0x00F0, 0x0000] },
    NamedReference { name: "eth;", codepoints: [0x00F0, 0x0000] },
    NamedReference { name: "euml", codepoints: [0x00EB, 0x0000] },
    NamedReference { name: "euml;", codepoints: [0x00EB, 0x0000] },
    NamedReference { name: "euro;", codepoints: [0x20AC, 0x0000] },
    NamedReference { name: "excl;", codepoints: [0x0021, 0x0000] },
    NamedReference { name: "exist;", codepoints: [0x2203, 0x0000] },
    NamedReference { name: "expectation;", codepoints: [0x2130, 0x0000] },
    NamedReference { name: "exponentiale;", codepoints: [0x2147, 0x0000] },
    NamedReference { name: "fallingdotseq;", codepoints: [0x2252, 0x0000] },
    NamedReference { name: "fcy;", codepoints: [0x0444, 0x0000] },
    NamedReference { name: "female;", codepoints: [0x2640, 0x0000] },
    NamedReference { name: "ffilig;", codepoints: [0xFB03, 0x0000] },
    NamedReference { name: "fflig;", codepoints: [0xFB00, 0x0000] },
    NamedReference { name: "ffllig;", codepoints: [0xFB04, 0x0000] },
    NamedReference { name: "ffr;", codepoints: [0x1D523, 0x0000] },
    NamedReference { name: "filig;", codepoints: [0xFB01, 0x0000] },
    NamedReference { name: "fjlig;", codepoints: [0x0066, 0x006A] },
    NamedReference { name: "flat;", codepoints: [0x266D, 0x0000] },
    NamedReference { name: "fllig;", codepoints: [0xFB02, 0x0000] },
    NamedReference { name: "fltns;", codepoints: [0x25B1, 0x0000] },
    NamedReference { name: "fnof;", codepoints: [0x0192, 0x0000] },
    NamedReference { name: "fopf;", codepoints: [0x1D557, 0x0000] },
    NamedReference { name: "forall;", codepoints: [0x2200, 0x0000] },
    NamedReference { name: "fork;", codepoints: [0x22D4, 0x0000] },
    NamedReference { name: "forkv;", codepoints: [0x2AD9, 0x0000] },
    NamedReference { name: "fpartint;", codepoints: [0x2A0D, 0x0000] },
    NamedReference { name: "frac12", codepoints: [0x00BD, 0x0000] },
    NamedReference { name: "frac12;", codepoints: [0x00BD, 0x0000] },
    NamedReference { name: "frac13;", codepoints: [0x2153, 0x0000] },
    NamedReference { name: "frac14", codepoints: [0x00BC, 0x0000] },
    NamedReference { name: "frac14;", codepoints: [0x00BC, 0x0000] },
    NamedReference { name: "frac15;", codepoints: [0x2155, 0x0000] },
    NamedReference { name: "frac16;", codepoints: [0x2159, 0x0000] },
    NamedReference { name: "frac18;", codepoints: [0x215B, 0x0000] },
    NamedReference { name: "frac23;", codepoints: [0x2154, 0x0000] },
    NamedReference { name: "frac25;", codepoints: [0x2156, 0x0000] },
    NamedReference { name: "frac34", codepoints: [0x00BE, 0x0000] },
    NamedReference { name: "frac34;", codepoints: [0x00BE, 0x0000] },
    NamedReference { name: "frac35;", codepoints: [0x2157, 0x0000] },
    NamedReference { name: "frac38;", codepoints: [0x215C, 0x0000] },
    NamedReference { name: "frac45;", codepoints: [0x2158, 0x0000] },
    NamedReference { name: "frac56;", codepoints: [0x215A, 0x0000] },
    NamedReference { name: "frac58;", codepoints: [0x215D, 0x0000] },
    NamedReference { name: "frac78;", codepoints: [0x215E, 0x0000] },
    NamedReference { name: "frasl;", codepoints: [0x2044, 0x0000] },
    NamedReference { name: "frown;", codepoints: [0x2322, 0x0000] },
    NamedReference { name: "fscr;", codepoints: [0x1D4BB, 0x0000] },
    NamedReference { name: "gE;", codepoints: [0x2267, 0x0000] },
    NamedReference { name: "gEl;", codepoints: [0x2A8C, 0x0000] },
    NamedReference { name: "gacute;", codepoints: [0x01F5, 0x0000] },
    NamedReference { name: "gamma;", codepoints: [0x03B3, 0x0000] },
    NamedReference { name: "gammad;", codepoints: [0x03DD, 0x0000] },
    NamedReference { name: "gap;", codepoints: [0x2A86, 0x0000] },
    NamedReference { name: "gbreve;", codepoints: [0x011F, 0x0000] },
    NamedReference { name: "gcirc;", codepoints: [0x011D, 0x0000] },
    NamedReference { name: "gcy;", codepoints: [0x0433, 0x0000] },
    NamedReference { name: "gdot;", codepoints: [0x0121, 0x0000] },
    NamedReference { name: "ge;", codepoints: [0x2265, 0x0000] },
    NamedReference { name: "gel;", codepoints: [0x22DB, 0x0000] },
    NamedReference { name: "geq;", codepoints: [0x2265, 0x0000] },
    NamedReference { name: "geqq;", codepoints: [0x2267, 0x0000] },
    NamedReference { name: "geqslant;", codepoints: [0x2A7E, 0x0000] },
    NamedReference { name: "ges;", codepoints: [0x2A7E, 0x0000] },
    NamedReference { name: "gescc;", codepoints: [0x2AA9, 0x0000] },
    NamedReference { name: "gesdot;", codepoints: [0x2A80, 0x0000] },
    NamedReference { name: "gesdoto;", codepoints: [0x2A82, 0x0000] },
    NamedReference { name: "gesdotol;", codepoints: [0x2A84, 0x0000] },
    NamedReference { name: "gesl;", codepoints: [0x22DB, 0xFE00] },
    NamedReference { name: "gesles;", codepoints: [0x2A94, 0x0000] },
    NamedReference { name: "gfr;", codepoints: [0x1D524, 0x0000] },
    NamedReference { name: "gg;", codepoints: [0x226B, 0x0000] },
    NamedReference { name: "ggg;", codepoints: [0x22D9, 0x0000] },
    NamedReference { name: "gimel;", codepoints: [0x2137, 0x0000] },
    NamedReference { name: "gjcy;", codepoints: [0x0453, 0x0000] },
    NamedReference { name: "gl;", codepoints: [0x2277, 0x0000] },
    NamedReference { name: "glE;", codepoints: [0x2A92, 0x0000] },
    NamedReference { name: "gla;", codepoints: [0x2AA5, 0x0000] },
    NamedReference { name: "glj;", codepoints: [0x2AA4, 0x0000] },
    NamedReference { name: "gnE;", codepoints: [0x2269, 0x0000] },
    NamedReference { name: "gnap;", codepoints: [0x2A8A, 0x0000] },
    NamedReference { name: "gnapprox;", codepoints: [0x2A8A, 0x0000] },
    NamedReference { name: "gne;", codepoints: [0x2A88, 0x0000] },
    NamedReference { name: "gneq;", codepoints: [0x2A88, 0x0000] },
    NamedReference { name: "gneqq;", codepoints: [0x2269, 0x0000] },
    NamedReference { name: "gnsim;", codepoints: [0x22E7, 0x0000] },
    NamedReference { name: "gopf;", codepoints: [0x1D558, 0x0000] },
    NamedReference { name: "grave;", codepoints: [0x0060, 0x0000] },
    NamedReference { name: "gscr;", codepoints: [0x210A, 0x0000] },
    NamedReference { name: "gsim;", codepoints: [0x2273, 0x0000] },
    NamedReference { name: "gsime;", codepoints: [0x2A8E, 0x0000] },
    NamedReference { name: "gsiml;", codepoints: [0x2A90, 0x0000] },
    NamedReference { name: "gt", codepoints: [0x003E, 0x0000] },
    NamedReference { name: "gt;", codepoints: [0x003E, 0x0000] },
    NamedReference { name: "gtcc;", codepoints: [0x2AA7, 0x0000] },
    NamedReference { name: "gtcir;", codepoints: [0x2A7A, 0x0000] },
    NamedReference { name: "gtdot;", codepoints: [0x22D7, 0x0000] },
    NamedReference { name: "gtlPar;", codepoints: [0x2995, 0x0000] },
    NamedReference { name: "gtquest;", codepoints: [0x2A7C, 0x0000] },
    NamedReference { name: "gtrapprox;", codepoints: [0x2A86, 0x0000] },
    NamedReference { name: "gtrarr;", codepoints: [0x2978, 0x0000] },
    NamedReference { name: "gtrdot;", codepoints: [0x22D7, 0x0000] },
    NamedReference { name: "gtreqless;", codepoints: [0x22DB, 0x0000] },
    NamedReference { name: "gtreqqless;", codepoints: [0x2A8C, 0x0000] },
    NamedReference { name: "gtrless;", codepoints: [0x2277, 0x0000] },
    NamedReference { name: "gtrsim;", codepoints: [0x2273, 0x0000] },
    NamedReference { name: "gvertneqq;", codepoints: [0x2269, 0xFE00] },
    NamedReference { name: "gvnE;", codepoints: [0x2269, 0xFE00] },
    NamedReference { name: "hArr;", codepoints: [0x21D4, 0x0000] },
    NamedReference { name: "hairsp;", codepoints: [0x200A, 0x0000] },
    NamedReference { name: "half;", codepoints: [0x00BD, 0x0000] },
    NamedReference { name: "hamilt;", codepoints: [0x210B, 0x0000] },
    NamedReference { name: "hardcy;", codepoints: [0x044A, 0x0000] },
    NamedReference { name: "harr;", codepoints: [0x2194, 0x0000] },
    NamedReference { name: "harrcir;", codepoints: [0x2948, 0x0000] },
    NamedReference { name: "harrw;", codepoints: [0x21AD, 0x0000] },
    NamedReference { name: "hbar;", codepoints: [0x210F, 0x0000] },
    NamedReference { name: "hcirc;", codepoints: [0x0125, 0x0000] },
    NamedReference { name: "hearts;", codepoints: [0x2665, 0x0000] },
    NamedReference { name: "heartsuit;", codepoints: [0x2665, 0x0000] },
    NamedReference { name: "hellip;", codepoints: [0x2026, 0x0000] },
    NamedReference { name: "hercon;", codepoints: [0x22B9, 0x0000] },
    NamedReference { name: "hfr;", codepoints: [0x1D525, 0x0000] },
    NamedReference { name: "hksearow;", codepoints: [0x2925, 0x0000] },
    NamedReference { name: "hkswarow;", codepoints: [0x2926, 0x0000] },
    NamedReference { name: "hoarr;", codepoints: [0x21FF, 0x0000] },
    NamedReference { name: "homtht;", codepoints: [0x223B, 0x0000] },
    NamedReference { name: "hookleftarrow;", codepoints: [0x21A9, 0x0000] },
    NamedReference { name: "hookrightarrow;", codepoints: [0x21AA, 0x0000] },
    NamedReference { name: "hopf;", codepoints: [0x1D559, 0x0000] },
    NamedReference { name: "horbar;", codepoints: [0x2015, 0x0000] },
    NamedReference { name: "hscr;", codepoints: [0x1D4BD, 0x0000] },
    NamedReference { name: "hslash;", codepoints: [0x210F, 0x0000] },
    NamedReference { name: "hstrok;", codepoints: [0x0127, 0x0000] },
    NamedReference { name: "hybull;", codepoints: [0x2043, 0x0000] },
    NamedReference { name: "hyphen;", codepoints: [0x2010, 0x0000] },
    NamedReference { name: "iacute", codepoints: [0x00ED, 0x0000] },
    NamedReference { name: "iacute;", codepoints: [0x00ED, 0x0000] },
    NamedReference { name: "ic;", codepoints: [0x2063, 0x0000] },
    NamedReference { name: "icirc", codepoints: [0x00EE, 0x0000] },
    NamedReference { name: "icirc;", codepoints: [0x00EE, 0x0000] },
    NamedReference { name: "icy;", codepoints: [0x0438, 0x0000] },
    NamedReference { name: "iecy;", codepoints: [0x0435, 0x0000] },
    NamedReference { name: "iexcl", codepoints: [0x00A1, 0x0000] },
    NamedReference { name: "iexcl;", codepoints: [0x00A1, 0x0000] },
    NamedReference { name: "iff;", codepoints: [0x21D4, 0x0000] },
    NamedReference { name: "ifr;", codepoints: [0x1D526, 0x0000] },
    NamedReference { name: "igrave", codepoints: [0x00EC, 0x0000] },
    NamedReference { name: "igrave;", codepoints: [0x00EC, 0x0000] },
    NamedReference { name: "ii;", codepoints: [0x2148, 0x0000] },
    NamedReference { name: "iiiint;", codepoints: [0x2A0C, 0x0000] },
    NamedReference { name: "iiint;", codepoints: [0x222D, 0x0000] },
    NamedReference { name: "iinfin;", codepoints: [0x29DC, 0x0000] },
    NamedReference { name: "iiota;", codepoints: [0x2129, 0x0000] },
    NamedReference { name: "ijlig;", codepoints: [0x0133, 0x0000] },
    NamedReference { name: "imacr;", codepoints: [0x012B, 0x0000] },
    NamedReference { name: "image;", codepoints: [0x2111, 0x0000] },
    NamedReference { name: "imagline;", codepoints: [0x2110, 0x0000] },
    NamedReference { name: "imagpart;", codepoints: [0x2111, 0x0000] },
    NamedReference { name: "imath;", codepoints: [0x0131, 0x0000] },
    NamedReference { name: "imof;", codepoints: [0x22B7, 0x0000] },
    NamedReference { name: "imped;", codepoints: [0x01B5, 0x0000] },
    NamedReference { name: "in;", codepoints: [0x2208, 0x0000] },
    NamedReference { name: "incare;", codepoints: [0x2105, 0x0000] },
    NamedReference { name: "infin;", codepoints: [0x221E, 0x0000] },
    NamedReference { name: "infintie;", codepoints: [0x29DD, 0x0000] },
    NamedReference { name: "inodot;", codepoints: [0x0131, 0x0000] },
    NamedReference { name: "int;", codepoints: [0x222B, 0x0000] },
    NamedReference { name: "intcal;", codepoints: [0x22BA, 0x0000] },
    NamedReference { name: "integers;", codepoints: [0x2124, 0x0000] },
    NamedReference { name: "intercal;", codepoints: [0x22BA, 0x0000] },
    NamedReference { name: "intlarhk;", codepoints: [0x2A17, 0x0000] },
    NamedReference { name: "intprod;", codepoints: [0x2A3C, 0x0000] },
    NamedReference { name: "iocy;", codepoints: [0x0451, 0x0000] },
    NamedReference { name: "iogon;", codepoints: [0x012F, 0x0000] },
    NamedReference { name: "iopf;", codepoints: [0x1D55A, 0x0000] },
    NamedReference { name: "iota;", codepoints: [0x03B9, 0x0000] },
    NamedReference { name: "iprod;", codepoints: [0x2A3C, 0x0000] },
    NamedReference { name: "iquest", codepoints: [0x00BF, 0x0000] },
    NamedReference { name: "iquest;", codepoints: [0x00BF, 0x0000] },
    NamedReference { name: "iscr;", codepoints: [0x1D4BE, 0x0000] },
    NamedReference { name: "isin;", codepoints: [0x2208, 0x0000] },
    NamedReference { name: "isinE;", codepoints: [0x22F9, 0x0000] },
    NamedReference { name: "isindot;", codepoints: [0x22F5, 0x0000] },
    NamedReference { name: "isins;", codepoints: [0x22F4, 0x0000] },
    NamedReference { name: "isinsv;", codepoints: [0x22F3, 0x0000] },
    NamedReference { name: "isinv;", codepoints: [0x2208, 0x0000] },
    NamedReference { name: "it;", codepoints: [0x2062, 0x0000] },
    NamedReference { name: "itilde;", codepoints: [0x0129, 0x0000] },
    NamedReference { name: "iukcy;", codepoints: [0x0456, 0x0000] },
    NamedReference { name: "iuml", codepoints: [0x00EF, 0x0000] },
    NamedReference { name: "iuml;", codepoints: [0x00EF, 0x0000] },
    NamedReference { name: "jcirc;", codepoints: [0x0135, 0x0000] },
    NamedReference { name: "jcy;", codepoints: [0x0439, 0x0000] },
    NamedReference { name: "jfr;", codepoints: [0x1D527, 0x0000] },
    NamedReference { name: "jmath;", codepoints: [0x0237, 0x0000] },
    NamedReference { name: "jopf;", codepoints: [0x1D55B, 0x0000] },
    NamedReference { name: "jscr;", codepoints: [0x1D4BF, 0x0000] },
    NamedReference { name: "jsercy;", codepoints: [0x0458, 0x0000] },
    NamedReference { name: "jukcy;", codepoints: [0x0454, 0x0000] },
    NamedReference { name: "kappa;", codepoints: [0x03BA, 0x0000] },
    NamedReference { name: "kappav;", codepoints: [0x03F0, 0x0000] },
    NamedReference { name: "kcedil;", codepoints: [0x0137, 0x0000] },
    NamedReference { name: "kcy;", codepoints: [0x043A, 0x0000] },
    NamedReference { name: "kfr;", codepoints: [0x1D528, 0x0000] },
    NamedReference { name: "kgreen;", codepoints: [0x0138, 0x0000] },
    NamedReference { name: "khcy;", codepoints: [0x0445, 0x0000] },
    NamedReference { name: "kjcy;", codepoints: [0x045C, 0x0000] },
    NamedReference { name: "kopf;", codepoints: [0x1D55C, 0x0000] },
    NamedReference { name: "kscr;", codepoints: [0x1D4C0, 0x0000] },
    NamedReference { name: "lAarr;", codepoints: [0x21DA, 0x0000] },
    NamedReference { name: "lArr;", codepoints: [0x21D0, 0x0000] },
    NamedReference { name: "lAtail;", codepoints: [0x291B, 0x0000] },
    NamedReference { name: "lBarr;", codepoints: [0x290E, 0x0000] },
    NamedReference { name: "lE;", codepoints: [0x2266, 0x0000] },
    NamedReference { name: "lEg;", codepoints: [0x2A8B, 0x0000] },
    NamedReference { name: "lHar;", codepoints: [0x2962, 0x0000] },
    NamedReference { name: "lacute;", codepoints: [0x013A, 0x0000] },
    NamedReference { name: "laemptyv;", codepoints: [0x29B4, 0x0000] },
    NamedReference { name: "lagran;", codepoints: [0x2112, 0x0000] },
    NamedReference { name: "lambda;", codepoints: [0x03BB, 0x0000] },
    NamedReference { name: "lang;", codepoints: [0x27E8, 0x0000] },
    NamedReference { name: "langd;", codepoints: [0x2991, 0x0000] },
    NamedReference { name: "langle;", codepoints: [0x27E8, 0x0000] },
    NamedReference { name: "lap;", codepoints: [0x2A85, 0x0000] },
    NamedReference { name: "laquo", codepoints: [0x00AB, 0x0000] },
    NamedReference { name: "laquo;", codepoints: [0x00AB, 0x0000] },
    NamedReference { name: "larr;", codepoints: [0x2190, 0x0000] },
    NamedReference { name: "larrb;", codepoints: [0x21E4, 0x0000] },
    NamedReference { name: "larrbfs;", codepoints: [0x291F, 0x0000] },
    NamedReference { name: "larrfs;", codepoints: [0x291D, 0x0000] },
    NamedReference { name: "larrhk;", codepoints: [0x21A9, 0x0000] },
    NamedReference { name: "larrlp;", codepoints: [0x21AB, 0x0000] },
    NamedReference { name: "larrpl;", codepoints: [0x2939, 0x0000] },
    NamedReference { name: "larrsim;", codepoints: [0x2973, 0x0000] },
    NamedReference { name: "larrtl;", codepoints: [0x21A2, 0x0000] },
    NamedReference { name: "lat;", codepoints: [0x2AAB, 0x0000] },
    NamedReference { name: "latail;", codepoints: [0x2919, 0x0000] },
    NamedReference { name: "late;", codepoints: [0x2AAD, 0x0000] },
    NamedReference { name: "lates;", codepoints: [0x2AAD, 0xFE00] },
    NamedReference { name: "lbarr;", codepoints: [0x290C, 0x0000] },
    NamedReference { name: "lbbrk;", codepoints: [0x2772, 0x0000] },
    NamedReference { name: "lbrace;", codepoints: [0x007B, 0x0000] },
    NamedReference { name: "lbrack;", codepoints: [0x005B, 0x0000] },
    NamedReference { name: "lbrke;", codepoints: [0x298B, 0x0000] },
    NamedReference { name: "lbrksld;", codepoints: [0x298F, 0x0000] },
    NamedReference { name: "lbrkslu;", codepoints: [0x298D, 0x0000] },
    NamedReference { name: "lcaron;", codepoints: [0x013E, 0x0000] },
    NamedReference { name: "lcedil;", codepoints: [0x013C, 0x0000] },
    NamedReference { name: "lceil;", codepoints: [0x2308, 0x0000] },
    NamedReference { name: "lcub;", codepoints: [0x007B, 0x0000] },
    NamedReference { name: "lcy;", codepoints: [0x043B, 0x0000] },
    NamedReference { name: "ldca;", codepoints: [0x2936, 0x0000] },
    NamedReference { name: "ldquo;", codepoints: [0x201C, 0x0000] },
    NamedReference { name: "ldquor;", codepoints: [0x201E, 0x0000] },
    NamedReference { name: "ldrdhar;", codepoints: [0x2967, 0x0000] },
    NamedReference { name: "ldrushar;", codepoints: [0x294B, 0x0000] },
    NamedReference { name: "ldsh;", codepoints: [0x21B2, 0x0000] },
    NamedReference { name: "le;", codepoints: [0x2264, 0x0000] },
    NamedReference { name: "leftarrow;", codepoints: [0x2190, 0x0000] },
    NamedReference { name: "leftarrowtail;", codepoints: [0x21A2, 0x0000] },
    NamedReference { name: "leftharpoondown;", codepoints: [0x21BD, 0x0000] },
    NamedReference { name: "leftharpoonup;", codepoints: [0x21BC, 0x0000] },
    NamedReference { name: "leftleftarrows;", codepoints: [0x21C7, 0x0000] },
    NamedReference { name: "leftrightarrow;", codepoints: [0x2194, 0x0000] },
    NamedReference { name: "leftrightarrows;", codepoints: [0x21C6, 0x0000] },
    NamedReference { name: "leftrightharpoons;", codepoints: [0x21CB, 0x0000] },
    NamedReference { name: "leftrightsquigarrow;", codepoints: [0x21AD, 0x0000] },
    NamedReference { name: "leftthreetimes;", codepoints: [0x22CB, 0x0000] },
    NamedReference { name: "leg;", codepoints: [0x22DA, 0x0000] },
    NamedReference { name: "leq;", codepoints: [0x2264, 0x0000] },
    NamedReference { name: "leqq;", codepoints: [0x2266, 0x0000] },
    NamedReference { name: "leqslant;", codepoints: [0x2A7D, 0x0000] },
    NamedReference { name: "les;", codepoints: [0x2A7D, 0x0000] },
    NamedReference { name: "lescc;", codepoints: [0x2AA8, 0x0000] },
    NamedReference { name: "lesdot;", codepoints: [0x2A7F, 0x0000] },
    NamedReference { name: "lesdoto;", codepoints: [0x2A81, 0x0000] },
    NamedReference { name: "lesdotor;", codepoints: [0x2A83, 0x0000] },
    NamedReference { name: "lesg;", codepoints: [0x22DA, 0xFE00] },
    NamedReference { name: "lesges;", codepoints: [0x2A93, 0x0000] },
    NamedReference { name: "lessapprox;", codepoints: [0x2A85, 0x0000] },
    NamedReference { name: "lessdot;", codepoints: [0x22D6, 0x0000] },
    NamedReference { name: "lesseqgtr;", codepoints: [0x22DA, 0x0000] },
    NamedReference { name: "lesseqqgtr;", codepoints: [0x2A8B, 0x0000] },
    NamedReference { name: "lessgtr;", codepoints: [0x2276, 0x0000] },
    NamedReference { name: "lesssim;", codepoints: [0x2272, 0x0000] },
    NamedReference { name: "lfisht;", codepoints: [0x297C, 0x0000] },
    NamedReference { name: "lfloor;", codepoints: [0x230A, 0x0000] },
    NamedReference { name: "lfr;", codepoints: [0x1D529, 0x0000] },
    NamedReference { name: "lg;", codepoints: [0x2276, 0x0000] },
    NamedReference { name: "lgE;", codepoints: [0x2A91, 0x0000] },
    NamedReference { name: "lhard;", codepoints: [0x21BD, 0x0000] },
    NamedReference { name: "lharu;", codepoints: [0x21BC, 0x0000] },
    NamedReference { name: "lharul;", codepoints: [0x296A, 0x0000] },
    NamedReference { name: "lhblk;", codepoints: [0x2584, 0x0000] },
    NamedReference { name: "ljcy;", codepoints: [0x0459, 0x0000] },
    NamedReference { name: "ll;", codepoints: [0x226A, 0x0000] },
    NamedReference { name: "llarr;", codepoints: [0x21C7, 0x0000] },
    NamedReference { name: "llcorner;", codepoints: [0x231E, 0x0000] },
    NamedReference { name: "llhard;", codepoints: [0x296B, 0x0000] },
    NamedReference { name: "lltri;", codepoints: [0x25FA, 0x0000] },
    NamedReference { name: "lmidot;", codepoints: [0x0140, 0x0000] },
    NamedReference { name: "lmoust;", codepoints: [0x23B0, 0x0000] },
    NamedReference { name: "lmoustache;", codepoints: [0x23B0, 0x0000] },
    NamedReference { name: "lnE;", codepoints: [0x2268, 0x0000] },
    NamedReference { name: "lnap;", codepoints: [0x2A89, 0x0000] },
    NamedReference { name: "lnapprox;", codepoints: [0x2A89, 0x0000] },
    NamedReference { name: "lne;", codepoints: [0x2A87, 0x0000] },
    NamedReference { name: "lneq;", codepoints: [0x2A87, 0x0000] },
    NamedReference { name: "lneqq;", codepoints: [0x2268, 0x0000] },
    NamedReference { name: "lnsim;", codepoints: [0x22E6, 0x0000] },
    NamedReference { name: "loang;", codepoints: [0x27EC, 0x0000] },
    NamedReference { name: "loarr;", codepoints: [0x21FD, 0x0000] },
    NamedReference { name: "lobrk;", codepoints: [0x27E6, 0x0000] },
    NamedReference { name: "longleftarrow;", codepoints: [0x27F5, 0x0000] },
    NamedReference { name: "longleftrightarrow;", codepoints: [0x27F7, 0x0000] },
    NamedReference { name: "longmapsto;", codepoints: [0x27FC, 0x0000] },
    NamedReference { name: "longrightarrow;", codepoints: [0x27F6, 0x0000] },
    NamedReference { name: "looparrowleft;", codepoints: [0x21AB, 0x0000] },
    NamedReference { name: "looparrowright;", codepoints: [0x21AC, 0x0000] },
    NamedReference { name: "lopar;", codepoints: [0x2985, 0x0000] },
    NamedReference { name: "lopf;", codepoints: [0x1D55D, 0x0000] },
    NamedReference { name: "loplus;", codepoints: [0x2A2D, 0x0000] },
    NamedReference { name: "lotimes;", codepoints: [0x2A34, 0x0000] },
    NamedReference { name: "lowast;", codepoints: [0x2217, 0x0000] },
    NamedReference { name: "lowbar;", codepoints: [0x005F, 0x0000] },
    NamedReference { name: "loz;", codepoints: [0x25CA, 0x0000] },
    NamedReference { name: "lozenge;", codepoints: [0x25CA, 0x0000] },
    NamedReference { name: "lozf;", codepoints: [0x29EB, 0x0000] },
    NamedReference { name: "lpar;", codepoints: [0x0028, 0x0000] },
    NamedReference { name: "lparlt;", codepoints: [0x2993, 0x0000] },
    NamedReference { name: "lrarr;", codepoints: [0x21C6, 0x0000] },
    NamedReference { name: "lrcorner;", codepoints: [0x231F, 0x0000] },
    NamedReference { name: "lrhar;", codepoints: [0x21CB, 0x0000] },
    NamedReference { name: "lrhard;", codepoints: [0x296D, 0x0000] },
    NamedReference { name: "lrm;", codepoints: [0x200E, 0x0000] },
    NamedReference { name: "lrtri;", codepoints: [0x22BF, 0x0000] },
    NamedReference { name: "lsaquo;", codepoints: [0x2039, 0x0000] },
    NamedReference { name: "lscr;", codepoints: [0x1D4C1, 0x0000] },
    NamedReference { name: "lsh;", codepoints: [0x21B0, 0x0000] },
    NamedReference { name: "lsim;", codepoints: [0x2272, 0x0000] },
    NamedReference { name: "lsime;", codepoints: [0x2A8D, 0x0000] },
    NamedReference { name: "lsimg;", codepoints: [0x2A8F, 0x0000] },
    NamedReference { name: "lsqb;", codepoints: [0x005B, 0x0000] },
    NamedReference { name: "lsquo;", codepoints: [0x2018, 0x0000] },
    NamedReference { name: "lsquor;", codepoints: [0x201A, 0x0000] },
    NamedReference { name: "lstrok;", codepoints: [0x0142, 0x0000] },
    NamedReference { name: "lt", codepoints: [0x003C, 0x0000] },
    NamedReference { name: "lt;", codepoints: [0x003C, 0x0000] },
    NamedReference { name: "ltcc;", codepoints: [0x2AA6, 0x0000] },
    NamedReference { name: "ltcir;", codepoints: [0x2A79, 0x0000] },
    NamedReference { name: "ltdot;", codepoints: [0x22D6, 0x0000] },
    NamedReference { name: "lthree;", codepoints: [0x22CB, 0x0000] },
    NamedReference { name: "ltimes;", codepoints: [0x22C9, 0x0000] },
    NamedReference { name: "ltlarr;", codepoints: [0x2976, 0x0000] },
    NamedReference { name: "ltquest;", codepoints: [0x2A7B, 0x0000] },
    NamedReference { name: "ltrPar;", codepoints: [0x2996, 0x0000] },
    NamedReference { name: "ltri;", codepoints: [0x25C3, 0x0000] },
    NamedReference { name: "ltrie;", codepoints: [0x22B4, 0x0000] },
    NamedReference { name: "ltrif;", codepoints: [0x25C2, 0x0000] },
    NamedReference { name: "lurdshar;", codepoints: [0x294A, 0x0000] },
    NamedReference { name: "luruhar;", codepoints: [0x2966, 0x0000] },
    NamedReference { name: "lvertneqq;", codepoints: [0x2268, 0xFE00] },
    NamedReference { name: "lvnE;", codepoints: [0x2268, 0xFE00] },
    NamedReference { name: "mDDot;", codepoints: [0x223A, 0x0000] },
    NamedReference { name: "macr", codepoints: [0x00AF, 0x0000] },
    NamedReference { name: "macr;", codepoints: [0x00AF, 0x0000] },
    NamedReference { name: "male;", codepoints: [0x2642, 0x0000] },
    NamedReference { name: "malt;", codepoints: [0x2720, 0x0000] },
    NamedReference { name: "maltese;", codepoints: [0x2720, 0x0000] },
    NamedReference { name: "map;", codepoints: [0x21A6, 0x0000] },
    NamedReference { name: "mapsto;", codepoints: [0x21A6, 0x0000] },
    NamedReference { name: "mapstodown;", codepoints: [0x21A7, 0x0000] },
    NamedReference { name: "mapstoleft;", codepoints: [0x21A4, 0x0000] },
    NamedReference { name: "mapstoup;", codepoints: [0x21A5, 0x0000] },
    NamedReference { name: "marker;", codepoints: [0x25AE, 0x0000] },
    NamedReference { name: "mcomma;", codepoints: [0x2A29, 0x0000] },
    NamedReference { name: "mcy;", codepoints: [0x043C, 0x0000] },
    NamedReference { name: "mdash;", codepoints: [0x2014, 0x0000] },
    NamedReference { name: "measuredangle;", codepoints: [0x2221, 0x0000] },
    NamedReference { name: "mfr;", codepoints: [0x1D52A, 0x0000] },
    NamedReference { name: "mho;", codepoints: [0x2127, 0x0000] },
    NamedReference { name: "micro", codepoints: [0x00B5, 0x0000] },
    NamedReference { name: "micro;", codepoints: [0x00B5, 0x0000] },
    NamedReference { name: "mid;", codepoints: [0x2223, 0x0000] },
    NamedReference { name: "midast;", codepoints: [0x002A, 0x0000] },
    NamedReference { name: "midcir;", codepoints: [0x2AF0, 0x0000] },
    NamedReference { name: "middot", codepoints: [0x00B7, 0x0000] },
    NamedReference { name: "middot;", codepoints: [0x00B7, 0x0000] },
    NamedReference { name: "minus;", codepoints: [0x2212, 0x0000] },
    NamedReference { name: "minusb;", codepoints: [0x229F, 0x0000] },
    NamedReference { name: "minusd;", codepoints: [0x2238, 0x0000] },
    NamedReference { name: "minusdu;", codepoints: [0x2A2A, 0x0000] },
    NamedReference { name: "mlcp;", codepoints: [0x2ADB, 0x0000] },
    NamedReference { name: "mldr;", codepoints: [0x2026, 0x0000] },
    NamedReference { name: "mnplus;", codepoints: [0x2213, 0x0000] },
    NamedReference { name: "models;", codepoints: [0x22A7, 0x0000] },
    NamedReference { name: "mopf;", codepoints: [0x1D55E, 0x0000] },
    NamedReference { name: "mp;", codepoints: [0x2213, 0x0000] },
    NamedReference { name: "mscr;", codepoints: [0x1D4C2, 0x0000] },
    NamedReference { name: "mstpos;", codepoints: [0x223E, 0x0000] },
    NamedReference { name: "mu;", codepoints: [0x03BC, 0x0000] },
    NamedReference { name: "multimap;", codepoints: [0x22B8, 0x0000] },
    NamedReference { name: "mumap;", codepoints: [0x22B8, 0x0000] },
    NamedReference { name: "nGg;", codepoints: [0x22D9, 0x0338] },
    NamedReference { name: "nGt;", codepoints: [0x226B, 0x20D2] },
    NamedReference { name: "nGtv;", codepoints: [0x226B, 0x0338] },
    NamedReference { name: "nLeftarrow;", codepoints: [0x21CD, 0x0000] },
    NamedReference { name: "nLeftrightarrow;", codepoints: [0x21CE, 0x0000] },
    NamedReference { name: "nLl;", codepoints: [0x22D8, 0x0338] },
    NamedReference { name: "nLt;", codepoints: [0x226A, 0x20D2] },
    NamedReference { name: "nLtv;", codepoints: [0x226A, 0x0338] },
    NamedReference { name: "nRightarrow;", codepoints: [0x21CF, 0x0000] },
    NamedReference { name: "nVDash;", codepoints: [0x22AF, 0x0000] },
    NamedReference { name: "nVdash;", codepoints: [0x22AE, 0x0000] },
    NamedReference { name: "nabla;", codepoints: [0x2207, 0x0000] },
    NamedReference { name: "nacute;", codepoints: [0x0144, 0x0000] },
    NamedReference { name: "nang;", codepoints: [0x2220, 0x20D2] },
    NamedReference { name: "nap;", codepoints: [0x2249, 0x0000] },
    NamedReference { name: "napE;", codepoints: [0x2A70, 0x0338] },
    NamedReference { name: "napid;", codepoints: [0x224B, 0x0338] },
    NamedReference { name: "napos;", codepoints: [0x0149, 0x0000] },
    NamedReference { name: "napprox;", codepoints: [0x2249, 0x0000] },
    NamedReference { name: "natur;", codepoints: [0x266E, 0x0000] },
    NamedReference { name: "natural;", codepoints: [0x266E, 0x0000] },
    NamedReference { name: "naturals;", codepoints: [0x2115, 0x0000] },
    NamedReference { name: "nbsp", codepoints: [0x00A0, 0x0000] },
    NamedReference { name: "nbsp;", codepoints: [0x00A0, 0x0000] },
    NamedReference { name: "nbump;", codepoints: [0x224E, 0x0338] },
    NamedReference { name: "nbumpe;", codepoints: [0x224F, 0x0338] },
    NamedReference { name: "ncap;", codepoints: [0x2A43, 0x0000] },
    NamedReference { name: "ncaron;", codepoints: [0x0148, 0x0000] },
    NamedReference { name: "ncedil;", codepoints: [0x0146, 0x0000] },
    NamedReference { name: "ncong;", codepoints: [0x2247, 0x0000] },
    NamedReference { name: "ncongdot;", codepoints: [0x2A6D, 0x0338] },
    NamedReference { name: "ncup;", codepoints: [0x2A42, 0x0000] },
    NamedReference { name: "ncy;", codepoints: [0x043D, 0x0000] },
    NamedReference { name: "ndash;", codepoints: [0x2013, 0x0000] },
    NamedReference { name: "ne;", codepoints: [0x2260, 0x0000] },
    NamedReference { name: "neArr;", codepoints: [0x21D7, 0x0000] },
    NamedReference { name: "nearhk;", codepoints: [0x2924, 0x0000] },
    NamedReference { name: "nearr;", codepoints: [0x2197, 0x0000] },
    NamedReference { name: "nearrow;", codepoints: [0x2197, 0x0000] },
    NamedReference { name: "nedot;", codepoints: [0x2250, 0x0338] },
    NamedReference { name: "nequiv;", codepoints: [0x2262, 0x0000] },
    NamedReference { name: "nesear;", codepoints: [0x2928, 0x0000] },
    NamedReference { name: "nesim;", codepoints: [0x2242, 0x0338] },
    NamedReference { name: "nexist;", codepoints: [0x2204, 0x0000] },
    NamedReference { name: "nexists;", codepoints: [0x2204, 0x0000] },
    NamedReference { name: "nfr;", codepoints: [0x1D52B, 0x0000] },
    NamedReference { name: "ngE;", codepoints: [0x2267, 0x0338] },
    NamedReference { name: "nge;", codepoints: [0x2271, 0x0000] },
    NamedReference { name: "ngeq;", codepoints: [0x2271, 0x0000] },
    NamedReference { name: "ngeqq;", codepoints: [0x2267, 0x0338] },
    NamedReference { name: "ngeqslant;", codepoints: [0x2A7E, 0x0338] },
    NamedReference { name: "nges;", codepoints: [0x2A7E, 0x0338] },
    NamedReference { name: "ngsim;", codepoints: [0x2275, 0x0000] },
    NamedReference { name: "ngt;", codepoints: [0x226F, 0x0000] },
    NamedReference { name: "ngtr;", codepoints: [0x226F, 0x0000] },
    NamedReference { name: "nhArr;", codepoints: [0x21CE, 0x0000] },
    NamedReference { name: "nharr;", codepoints: [0x21AE, 0x0000] },
    NamedReference { name: "nhpar;", codepoints: [0x2AF2, 0x0000] },
    NamedReference { name: "ni;", codepoints: [0x220B, 0x0000] },
    NamedReference { name: "nis;", codepoints: [0x22FC, 0x0000] },
    NamedReference { name: "nisd;", codepoints: [0x22FA, 0x0000] },
    NamedReference { name: "niv;", codepoints: [0x220B, 0x0000] },
    NamedReference { name: "njcy;", codepoints: [0x045A, 0x0000] },
    NamedReference { name: "nlArr;", codepoints: [0x21CD, 0x0000] },
    NamedReference { name: "nlE;", codepoints: [0x2266, 0x0338] },
    NamedReference { name: "nlarr;", codepoints: [0x219A, 0x0000] },
    NamedReference { name: "nldr;", codepoints: [0x2025, 0x0000] },
    NamedReference { name: "nle;", codepoints: [0x2270, 0x0000] },
    NamedReference { name: "nleftarrow;", codepoints: [0x219A, 0x0000] },
    NamedReference { name: "nleftrightarrow;", codepoints: [0x21AE, 0x0000] },
    NamedReference { name: "nleq;", codepoints: [0x2270, 0x0000] },
    NamedReference { name: "nleqq;", codepoints: [0x2266, 0x0338] },
    NamedReference { name: "nleqslant;", codepoints: [0x2A7D, 0x0338] },
    NamedReference { name: "nles;", codepoints: [0x2A7D, 0x0338] },
    NamedReference { name: "nless;", codepoints: [0x226E, 0x0000] },
    NamedReference { name: "nlsim;", codepoints: [0x2274, 0x0000] },
    NamedReference { name: "nlt;", codepoints: [0x226E, 0x0000] },
    NamedReference { name: "nltri;", codepoints: [0x22EA, 0x0000] },
    NamedReference { name: "nltrie;", codepoints: [0x22EC, 0x0000] },
    NamedReference { name: "nmid;", codepoints: [0x2224, 0x0000] },
    NamedReference { name: "nopf;", codepoints: [0x1D55F, 0x0000] },
    NamedReference { name: "not", codepoints: [0x00AC, 0x0000] },
    NamedReference { name: "not;", codepoints: [0x00AC, 0x0000] },
    NamedReference { name: "notin;", codepoints: [0x2209, 0x0000] },
    NamedReference { name: "notinE;", codepoints: [0x22F9, 0x0338] },
    NamedReference { name: "notindot;", codepoints: [0x22F5, 0x0338] },
    NamedReference { name: "notinva;", codepoints: [0x2209, 0x0000] },
    NamedReference { name: "notinvb;", codepoints: [0x22F7, 0x0000] },
    NamedReference { name: "notinvc;", codepoints: [0x22F6, 0x0000] },
    NamedReference { name: "notni;", codepoints: [0x220C, 0x0000] },
    NamedReference { name: "notniva;", codepoints: [0x220C, 0x0000] },
    NamedReference { name: "notnivb;", codepoints: [0x22FE, 0x0000] },
    NamedReference { name: "notnivc;", codepoints: [0x22FD, 0x0000] },
    NamedReference { name: "npar;", codepoints: [0x2226, 0x0000] },
    NamedReference { name: "nparallel;", codepoints: [0x2226, 0x0000] },
    NamedReference { name: "nparsl;", codepoints: [0x2AFD, 0x20E5] },
    NamedReference { name: "npart;", codepoints: [0x2202, 0x0338] },
    NamedReference { name: "npolint;", codepoints: [0x2A14, 0x0000] },
    NamedReference { name: "npr;", codepoints: [0x2280, 0x0000] },
    NamedReference { name: "nprcue;", codepoints: [0x22E0, 0x0000] },
    NamedReference { name: "npre;", codepoints: [0x2AAF, 0x0338] },
    NamedReference { name: "nprec;", codepoints: [0x2280, 0x0000] },
    NamedReference { name: "npreceq;", codepoints: [0x2AAF, 0x0338] },
    NamedReference { name: "nrArr;", codepoints: [0x21CF, 0x0000] },
    NamedReference { name: "nrarr;", codepoints: [0x219B, 0x0000] },
    NamedReference { name: "nrarrc;", codepoints: [0x2933, 0x0338] },
    NamedReference { name: "nrarrw;", codepoints: [0x219D, 0x0338] },
    NamedReference { name: "nrightarrow;", codepoints: [0x219B, 0x0000] },
    NamedReference { name: "nrtri;", codepoints: [0x22EB, 0x0000] },
    NamedReference { name: "nrtrie;", codepoints: [0x22ED, 0x0000] },
    NamedReference { name: "nsc;", codepoints: [0x2281, 0x0000] },
    NamedReference { name: "nsccue;", codepoints: [0x22E1, 0x0000] },
    NamedReference { name: "nsce;", codepoints: [0x2AB0, 0x0338] },
    NamedReference { name: "nscr;", codepoints: [0x1D4C3, 0x0000] },
    NamedReference { name: "nshortmid;", codepoints: [0x2224, 0x0000] },
    NamedReference { name: "nshortparallel;", codepoints: [0x2226, 0x0000] },
    NamedReference { name: "nsim;", codepoints: [0x2241, 0x0000] },
    NamedReference { name: "nsime;", codepoints: [0x2244, 0x0000] },
    NamedReference { name: "nsimeq;", codepoints: [0x2244, 0x0000] },
    NamedReference { name: "nsmid;", codepoints: [0x2224, 0x0000] },
    NamedReference { name: "nspar;", codepoints: [0x2226, 0x0000] },
    NamedReference { name: "nsqsube;", codepoints: [0x22E2, 0x0000] },
    NamedReference { name: "nsqsupe;", codepoints: [0x22E3, 0x0000] },
    NamedReference { name: "nsub;", codepoints: [0x2284, 0x0000] },
    NamedReference { name: "nsubE;", codepoints: [0x2AC5, 0x0338] },
    NamedReference { name: "nsube;", codepoints: [0x2288, 0x0000] },
    NamedReference { name: "nsubset;", codepoints: [0x2282, 0x20D2] },
    NamedReference { name: "nsubseteq;", codepoints: [0x2288, 0x0000] },
    NamedReference { name: "nsubseteqq;", codepoints: [0x2AC5, 0x0338] },
    NamedReference { name: "nsucc;", codepoints: [0x2281, 0x0000] },
    NamedReference { name: "nsucceq;", codepoints: [0x2AB0, 0x0338] },
    NamedReference { name: "nsup;", codepoints: [0x2285, 0x0000] },
    NamedReference { name: "nsupE;", codepoints: [0x2AC6, 0x0338] },
    NamedReference { name: "nsupe;", codepoints: [0x2289, 0x0000] },
    NamedReference { name: "nsupset;", codepoints: [0x2283, 0x20D2] },
    NamedReference { name: "nsupseteq;", codepoints: [0x2289, 0x0000] },
    NamedReference { name: "nsupseteqq;", codepoints: [0x2AC6, 0x0338] },
    NamedReference { name: "ntgl;", codepoints: [0x2279, 0x0000] },
    NamedReference { name: "ntilde", codepoints: [0x00F1, 0x0000] },
    NamedReference { name: "ntilde;", codepoints: [0x00F1, 0x0000] },
    NamedReference { name: "ntlg;", codepoints: [0x2278, 0x0000] },
    NamedReference { name: "ntriangleleft;", codepoints: [0x22EA, 0x0000] },
    NamedReference { name: "ntrianglelefteq;", codepoints: [0x22EC, 0x0000] },
    NamedReference { name: "ntriangleright;", codepoints: [0x22EB, 0x0000] },
    NamedReference { name: "ntrianglerighteq;", codepoints: [0x22ED, 0x0000] },
    NamedReference { name: "nu;", codepoints: [0x03BD, 0x0000] },
    NamedReference { name: "num;", codepoints: [0x0023, 0x0000] },
    NamedReference { name: "numero;", codepoints: [0x2116, 0x0000] },
    NamedReference { name: "numsp;", codepoints: [0x2007, 0x0000] },
    NamedReference { name: "nvDash;", codepoints: [0x22AD, 0x0000] },
    NamedReference { name: "nvHarr;", codepoints: [0x2904, 0x0000] },
    NamedReference { name: "nvap;", codepoints: [0x224D, 0x20D2] },
    NamedReference { name: "nvdash;", codepoints: [0x22AC, 0x0000] },
    NamedReference { name: "nvge;", codepoints: [0x2265, 0x20D2] },
    NamedReference { name: "nvgt;", codepoints: [0x003E, 0x20D2] },
    NamedReference { name: "nvinfin;", codepoints: [0x29DE, 0x0000] },
    NamedReference { name: "nvlArr;", codepoints: [0x2902, 0x0000] },
    NamedReference { name: "nvle;", codepoints: [0x2264, 0x20D2] },
    NamedReference { name: "nvlt;", codepoints: [0x003C, 0x20D2] },
    NamedReference { name: "nvltrie;", codepoints: [0x22B4, 0x20D2] },
    NamedReference { name: "nvrArr;", codepoints: [0x2903, 0x0000] },
    NamedReference { name: "nvrtrie;", codepoints: [0x22B5, 0x20D2] },
    NamedReference { name: "nvsim;", codepoints: [0x223C, 0x20D2] },
    NamedReference { name: "nwArr;", codepoints: [0x21D6, 0x0000] },
    NamedReference { name: "nwarhk;", codepoints: [0x2923, 0x0000] },
    NamedReference { name: "nwarr;", codepoints: [0x2196, 0x0000] },
    NamedReference { name: "nwarrow;", codepoints: [0x2196, 0x0000] },
    NamedReference { name: "nwnear;", codepoints: [0x2927, 0x0000] },
    NamedReference { name: "oS;", codepoints: [0x24C8, 0x0000] },
    NamedReference { name: "oacute", codepoints: [0x00F3, 0x0000] },
    NamedReference { name: "oacute;", codepoints: [0x00F3, 0x0000] },
    NamedReference { name: "oast;", codepoints: [0x229B, 0x0000] },
    NamedReference { name: "ocir;", codepoints: [0x229A, 0x0000] },
    NamedReference { name: "ocirc", codepoints: [0x00F4, 0x0000] },
    NamedReference { name: "ocirc;", codepoints: [0x00F4, 0x0000] },
    NamedReference { name: "ocy;", codepoints: [0x043E, 0x0000] },
    NamedReference { name: "odash;", codepoints: [0x229D, 0x0000] },
    NamedReference { name: "odblac;", codepoints: [0x0151, 0x0000] },
    NamedReference { name: "odiv;", codepoints: [0x2A38, 0x0000] },
    NamedReference { name: "odot;", codepoints: [0x2299, 0x0000] },
    NamedReference { name: "odsold;", codepoints: [0x29BC, 0x0000] },
    NamedReference { name: "oelig;", codepoints: [0x0153, 0x0000] },
    NamedReference { name: "ofcir;", codepoints: [0x29BF, 0x0000] },
    NamedReference { name: "ofr;", codepoints: [0x1D52C, 0x0000] },
    NamedReference { name: "ogon;", codepoints: [0x02DB, 0x0000] },
    NamedReference { name: "ograve", codepoints: [0x00F2, 0x0000] },
    NamedReference { name: "ograve;", codepoints: [0x00F2, 0x0000] },
    NamedReference { name: "ogt;", codepoints: [0x29C1, 0x0000] },
    NamedReference { name: "ohbar;", codepoints: [0x29B5, 0x0000] },
    NamedReference { name: "ohm;", codepoints: [0x03A9, 0x0000] },
    NamedReference { name: "oint;", codepoints: [0x222E, 0x0000] },
    NamedReference { name: "olarr;", codepoints: [0x21BA, 0x0000] },
    NamedReference { name: "olcir;", codepoints: [0x29BE, 0x0000] },
    NamedReference { name: "olcross;", codepoints: [0x29BB, 0x0000] },
    NamedReference { name: "oline;", codepoints: [0x203E, 0x0000] },
    NamedReference { name: "olt;", codepoints: [0x29C0, 0x0000] },
    NamedReference { name: "omacr;", codepoints: [0x014D, 0x0000] },
    NamedReference { name: "omega;", codepoints: [0x03C9, 0x0000] },
    NamedReference { name: "omicron;", codepoints: [0x03BF, 0x0000] },
    NamedReference { name: "omid;", codepoints: [0x29B6, 0x0000] },
    NamedReference { name: "ominus;", codepoints: [0x2296, 0x0000] },
    NamedReference { name: "oopf;", codepoints: [0x1D560, 0x0000] },
    NamedReference { name: "opar;", codepoints: [0x29B7, 0x0000] },
    NamedReference { name: "operp;", codepoints: [0x29B9, 0x0000] },
    NamedReference { name: "oplus;", codepoints: [0x2295, 0x0000] },
    NamedReference { name: "or;", codepoints: [0x2228, 0x0000] },
    NamedReference { name: "orarr;", codepoints: [0x21BB, 0x0000] },
    NamedReference { name: "ord;", codepoints: [0x2A5D, 0x0000] },
    NamedReference { name: "order;", codepoints: [0x2134, 0x0000] },
    NamedReference { name: "orderof;", codepoints: [0x2134, 0x0000] },
    NamedReference { name: "ordf", codepoints: [0x00AA, 0x0000] },
    NamedReference { name: "ordf;", codepoints: [0x00AA, 0x0000] },
    NamedReference { name: "ordm", codepoints: [0x00BA, 0x0000] },
    NamedReference { name: "ordm;", codepoints: [0x00BA, 0x0000] },
    NamedReference { name: "origof;", codepoints: [0x22B6, 0x0000] },
    NamedReference { name: "oror;", codepoints: [0x2A56, 0x0000] },
    NamedReference { name: "orslope;", codepoints: [0x2A57, 0x0000] },
    NamedReference { name: "orv;", codepoints: [0x2A5B, 0x0000] },
    NamedReference { name: "oscr;", codepoints: [0x2134, 0x0000] },
    NamedReference { name: "oslash", codepoints: [0x00F8, 0x0000] },
    NamedReference { name: "oslash;", codepoints: [0x00F8, 0x0000] },
    NamedReference { name: "osol;", codepoints: [0x2298, 0x0000] },
    NamedReference { name: "otilde", codepoints: [0x00F5, 0x0000] },
    NamedReference { name: "otilde;", codepoints: [0x00F5, 0x0000] },
    NamedReference { name: "otimes;", codepoints: [0x2297, 0x0000] },
    NamedReference { name: "otimesas;", codepoints: [0x2A36, 0x0000] },
    NamedReference { name: "ouml", codepoints: [0x00F6, 0x0000] },
    NamedReference { name: "ouml;", codepoints: [0x00F6, 0x0000] },
    NamedReference { name: "ovbar;", codepoints: [0x233D, 0x0000] },
    NamedReference { name: "par;", codepoints: [0x2225, 0x0000] },
    NamedReference { name: "para", codepoints: [0x00B6, 0x0000] },
    NamedReference { name: "para;", codepoints: [0x00B6, 0x0000] },
    NamedReference { name: "parallel;", codepoints: [0x2225, 0x0000] },
    NamedReference { name: "parsim;", codepoints: [0x2AF3, 0x0000] },
    NamedReference { name: "parsl;", codepoints: [0x2AFD, 0x0000] },
    NamedReference { name: "part;", codepoints: [0x2202, 0x0000] },
    NamedReference { name: "pcy;", codepoints: [0x043F, 0x0000] },
    NamedReference { name: "percnt;", codepoints: [0x0025, 0x0000] },
    NamedReference { name: "period;", codepoints: [0x002E, 0x0000] },
    NamedReference { name: "permil;", codepoints: [0x2030, 0x0000] },
    NamedReference { name: "perp;", codepoints: [0x22A5, 0x0000] },
    NamedReference { name: "pertenk;", codepoints: [0x2031, 0x0000] },
    NamedReference { name: "pfr;", codepoints: [0x1D52D, 0x0000] },
    NamedReference { name: "phi;", codepoints: [0x03C6, 0x0000] },
    NamedReference { name: "phiv;", codepoints: [0x03D5, 0x0000] },
    NamedReference { name: "phmmat;", codepoints: [0x2133, 0x0000] },
    NamedReference { name: "phone;", codepoints: [0x260E, 0x0000] },
    NamedReference { name: "pi;", codepoints: [0x03C0, 0x0000] },
    NamedReference { name: "pitchfork;", codepoints: [0x22D4, 0x0000] },
    NamedReference { name: "piv;", codepoints: [0x03D6, 0x0000] },
    NamedReference { name: "planck;", codepoints: [0x210F, 0x0000] },
    NamedReference { name: "planckh;", codepoints: [0x210E, 0x0000] },
    NamedReference { name: "plankv;", codepoints: [0x210F, 0x0000] },
    NamedReference { name: "plus;", codepoints: [0x002B, 0x0000] },
    NamedReference { name: "plusacir;", codepoints: [0x2A23, 0x0000] },
    NamedReference { name: "plusb;", codepoints: [0x229E, 0x0000] },
    NamedReference { name: "pluscir;", codepoints: [0x2A22, 0x0000] },
    NamedReference { name: "plusdo;", codepoints: [0x2214, 0x0000] },
    NamedReference { name: "plusdu;", codepoints: [0x2A25, 0x0000] },
    NamedReference { name: "pluse;", codepoints: [0x2A72, 0x0000] },
    NamedReference { name: "plusmn", codepoints: [0x00B1, 0x0000] },
    NamedReference { name: "plusmn;", codepoints: [0x00B1, 0x0000] },
    NamedReference { name: "plussim;", codepoints: [0x2A26, 0x0000] },
    NamedReference { name: "plustwo;", codepoints: [0x2A27, 0x0000] },
    NamedReference { name: "pm;", codepoints: [0x00B1, 0x0000] },
    NamedReference { name: "pointint;", codepoints: [0x2A15, 0x0000] },
    NamedReference { name: "popf;", codepoints: [0x1D561, 0x0000] },
    NamedReference { name: "pound", codepoints: [0x00A3, 0x0000] },
    NamedReference { name: "pound;", codepoints: [0x00A3, 0x0000] },
    NamedReference { name: "pr;", codepoints: [0x227A, 0x0000] },
    NamedReference { name: "prE;", codepoints: [0x2AB3, 0x0000] },
    NamedReference { name: "prap;", codepoints: [0x2AB7, 0x0000] },
    NamedReference { name: "prcue;", codepoints: [0x227C, 0x0000] },
    NamedReference { name: "pre;", codepoints: [0x2AAF, 0x0000] },
    NamedReference { name: "prec;", codepoints: [0x227A, 0x0000] },
    NamedReference { name: "precapprox;", codepoints: [0x2AB7, 0x0000] },
    NamedReference { name: "preccurlyeq;", codepoints: [0x227C, 0x0000] },
    NamedReference { name: "preceq;", codepoints: [0x2AAF, 0x0000] },
    NamedReference { name: "precnapprox;", codepoints: [0x2AB9, 0x0000] },
    NamedReference { name: "precneqq;", codepoints: [0x2AB5, 0x0000] },
    NamedReference { name: "precnsim;", codepoints: [0x22E8, 0x0000] },
    NamedReference { name: "precsim;", codepoints: [0x227E, 0x0000] },
    NamedReference { name: "prime;", codepoints: [0x2032, 0x0000] },
    NamedReference { name: "primes;", codepoints: [0x2119, 0x0000] },
    NamedReference { name: "prnE;", codepoints: [0x2AB5, 0x0000] },
    NamedReference { name: "prnap;", codepoints: [0x2AB9, 0x0000] },
    NamedReference { name: "prnsim;", codepoints: [0x22E8, 0x0000] },
    NamedReference { name: "prod;", codepoints: [0x220F, 0x0000] },
    NamedReference { name: "profalar;", codepoints: [0x232E, 0x0000] },
    NamedReference { name: "profline;", codepoints: [0x2312, 0x0000] },
    NamedReference { name: "profsurf;", codepoints: [0x2313, 0x0000] },
    NamedReference { name: "prop;", codepoints: [0x221D, 0x0000] },
    NamedReference { name: "propto;", codepoints: [0x221D, 0x0000] },
    NamedReference { name: "prsim;", codepoints: [0x227E, 0x0000] },
    NamedReference { name: "prurel;", codepoints: [0x22B0, 0x0000] },
    NamedReference { name: "pscr;", codepoints: [0x1D4C5, 0x0000] },
    NamedReference { name: "psi;", codepoints: [0x03C8, 0x0000] },
    NamedReference { name: "puncsp;", codepoints: [0x2008, 0x0000] },
    NamedReference { name: "qfr;", codepoints: [0x1D52E, 0x0000] },
    NamedReference { name: "qint;", codepoints: [0x2A0C, 0x0000] },
    NamedReference { name: "qopf;", codepoints: [0x1D562, 0x0000] },
    NamedReference { name: "qprime;", codepoints: [0x2057, 0x0000] },
    NamedReference { name: "qscr;", codepoints: [0x1D4C6, 0x0000] },
    NamedReference { name: "quaternions;", codepoints: [0x210D, 0x0000] },
    NamedReference { name: "quatint;", codepoints: [0x2A16, 0x0000] },
    NamedReference { name: "quest;", codepoints: [0x003F, 0x0000] },
    NamedReference { name: "questeq;", codepoints: [0x225F, 0x0000] },
    NamedReference { name: "quot", codepoints: [0x0022, 0x0000] },
    NamedReference { name: "quot;", codepoints: [0x0022, 0x0000] },
    NamedReference { name: "rAarr;", codepoints: [0x21DB, 0x0000] },
    NamedReference { name: "rArr;", codepoints: [0x21D2, 0x0000] },
    NamedReference { name: "rAtail;", codepoints: [0x291C, 0x0000] },
    NamedReference { name: "rBarr;", codepoints: [0x290F, 0x0000] },
    NamedReference { name: "rHar;", codepoints: [0x2964, 0x0000] },
    NamedReference { name: "race;", codepoints: [0x223D, 0x0331] },
    NamedReference { name: "racute;", codepoints: [0x0155, 0x0000] },
    NamedReference { name: "radic;", codepoints: [0x221A, 0x0000] },
    NamedReference { name: "raemptyv;", codepoints: [0x29B3, 0x0000] },
    NamedReference { name: "rang;", codepoints: [0x27E9, 0x0000] },
    NamedReference { name: "rangd;", codepoints: [0x2992, 0x0000] },
    NamedReference { name: "range;", codepoints: [0x29A5, 0x0000] },
    NamedReference { name: "rangle;", codepoints: [0x27E9, 0x0000] },
    NamedReference { name: "raquo", codepoints: [0x00BB, 0x0000] },
    NamedReference { name: "raquo;", codepoints: [0x00BB, 0x0000] },
    NamedReference { name: "rarr;", codepoints: [0x2192, 0x0000] },
    NamedReference { name: "rarrap;", codepoints: [0x2975, 0x0000] },
    NamedReference { name: "rarrb;", codepoints: [0x21E5, 0x0000] },
    NamedReference { name: "rarrbfs;", codepoints: [0x2920, 0x0000] },
    NamedReference { name: "rarrc;", codepoints: [0x2933, 0x0000] },
    NamedReference { name: "rarrfs;", codepoints: [0x291E, 0x0000] },
    NamedReference { name: "rarrhk;", codepoints: [0x21AA, 0x0000] },
    NamedReference { name: "rarrlp;", codepoints: [0x21AC, 0x0000] },
    NamedReference { name: "rarrpl;", codepoints: [0x2945, 0x0000] },
    NamedReference { name: "rarrsim;", codepoints: [0x2974, 0x0000] },
    NamedReference { name: "rarrtl;", codepoints: [0x21A3, 0x0000] },
    NamedReference { name: "rarrw;", codepoints: [0x219D, 0x0000] },
    NamedReference { name: "ratail;", codepoints: [0x291A, 0x0000] },
    NamedReference { name: "ratio;", codepoints: [0x2236, 0x0000] },
    NamedReference { name: "rationals;", codepoints: [0x211A, 0x0000] },
    NamedReference { name: "rbarr;", codepoints: [0x290D, 0x0000] },
    NamedReference { name: "rbbrk;", codepoints: [0x2773, 0x0000] },
    NamedReference { name: "rbrace;", codepoints: [0x007D, 0x0000] },
    NamedReference { name: "rbrack;", codepoints: [0x005D, 0x0000] },
    NamedReference { name: "rbrke;", codepoints: [0x298C, 0x0000] },
    NamedReference { name: "rbrksld;", codepoints: [0x298E, 0x0000] },
    NamedReference { name: "rbrkslu;", codepoints: [0x2990, 0x0000] },
    NamedReference { name: "rcaron;", codepoints: [0x0159, 0x0000] },
    NamedReference { name: "rcedil;", codepoints: [0x0157, 0x0000] },
    NamedReference { name: "rceil;", codepoints: [0x2309, 0x0000] },
    NamedReference { name: "rcub;", codepoints: [0x007D, 0x0000] },
    NamedReference { name: "rcy;", codepoints: [0x0440, 0x0000] },
    NamedReference { name: "rdca;", codepoints: [0x2937, 0x0000] },
    NamedReference { name: "rdldhar;", codepoints: [0x2969, 0x0000] },
    NamedReference { name: "rdquo;", codepoints: [0x201D, 0x0000] },
    NamedReference { name: "rdquor;", codepoints: [0x201D, 0x0000] },
    NamedReference { name: "rdsh;", codepoints: [0x21B3, 0x0000] },
    NamedReference { name: "real;", codepoints: [0x211C, 0x0000] },
    NamedReference { name: "realine;", codepoints: [0x211B, 0x0000] },
    NamedReference { name: "realpart;", codepoints: [0x211C, 0x0000] },
    NamedReference { name: "reals;", codepoints: [0x211D, 0x0000] },
    NamedReference { name: "rect;", codepoints: [0x25AD, 0x0000] },
    NamedReference { name: "reg", codepoints: [0x00AE, 0x0000] },
    NamedReference { name: "reg;", codepoints: [0x00AE, 0x0000] },
    NamedReference { name: "rfisht;", codepoints: [0x297D, 0x0000] },
    NamedReference { name: "rfloor;", codepoints: [0x230B, 0x0000] },
    NamedReference { name: "rfr;", codepoints: [0x1D52F, 0x0000] },
    NamedReference { name: "rhard;", codepoints: [0x21C1, 0x0000] },
    NamedReference { name: "rharu;", codepoints: [0x21C0, 0x0000] },
    NamedReference { name: "rharul;", codepoints: [0x296C, 0x0000] },
    NamedReference { name: "rho;", codepoints: [0x03C1, 0x0000] },
    NamedReference { name: "rhov;", codepoints: [0x03F1, 0x0000] },
    NamedReference { name: "rightarrow;", codepoints: [0x2192, 0x0000] },
    NamedReference { name: "rightarrowtail;", codepoints: [0x21A3, 0x0000] },
    NamedReference { name: "rightharpoondown;", codepoints: [0x21C1, 0x0000] },
    NamedReference { name: "rightharpoonup;", codepoints: [0x21C0, 0x0000] },
    NamedReference { name: "rightleftarrows;", codepoints: [0x21C4, 0x0000] },
    NamedReference { name: "rightleftharpoons;", codepoints: [0x21CC, 0x0000] },
    NamedReference { name: "rightrightarrows;", codepoints: [0x21C9, 0x0000] },
    NamedReference { name: "rightsquigarrow;", codepoints: [0x219D, 0x0000] },
    NamedReference { name: "rightthreetimes;", codepoints: [0x22CC, 0x0000] },
    NamedReference { name: "ring;", codepoints: [0x02DA, 0x0000] },
    NamedReference { name: "risingdotseq;", codepoints: [0x2253, 0x0000] },
    NamedReference { name: "rlarr;", codepoints: [0x21C4, 0x0000] },
    NamedReference { name: "rlhar;", codepoints: [0x21CC, 0x0000] },
    NamedReference { name: "rlm;", codepoints: [0x200F, 0x0000] },
    NamedReference { name: "rmoust;", codepoints: [0x23B1, 0x0000] },
    NamedReference { name: "rmoustache;", codepoints: [0x23B1, 0x0000] },
    NamedReference { name: "rnmid;", codepoints: [0x2AEE, 0x0000] },
    NamedReference { name: "roang;", codepoints: [0x27ED, 0x0000] },
    NamedReference { name: "roarr;", codepoints: [0x21FE, 0x0000] },
    NamedReference { name: "robrk;", codepoints: [0x27E7, 0x0000] },
    NamedReference { name: "ropar;", codepoints: [0x2986, 0x0000] },
    NamedReference { name: "ropf;", codepoints: [0x1D563, 0x0000] },
    NamedReference { name: "roplus;", codepoints: [0x2A2E, 0x0000] },
    NamedReference { name: "rotimes;", codepoints: [0x2A35, 0x0000] },
    NamedReference { name: "rpar;", codepoints: [0x0029, 0x0000] },
    NamedReference { name: "rpargt;", codepoints: [0x2994, 0x0000] },
    NamedReference { name: "rppolint;", codepoints: [0x2A12, 0x0000] },
    NamedReference { name: "rrarr;", codepoints: [0x21C9, 0x0000] },
    NamedReference { name: "rsaquo;", codepoints: [0x203A, 0x0000] },
    NamedReference { name: "rscr;", codepoints: [0x1D4C7, 0x0000] },
    NamedReference { name: "rsh;", codepoints: [0x21B1, 0x0000] },
    NamedReference { name: "rsqb;", codepoints: [0x005D, 0x0000] },
    NamedReference { name: "rsquo;", codepoints: [0x2019, 0x0000] },
    NamedReference { name: "rsquor;", codepoints: [0x2019, 0x0000] },
    NamedReference { name: "rthree;", codepoints: [0x22CC, 0x0000] },
    NamedReference { name: "rtimes;", codepoints: [0x22CA, 0x0000] },
    NamedReference { name: "rtri;", codepoints: [0x25B9, 0x0000] },
    NamedReference { name: "rtrie;", codepoints: [0x22B5, 0x0000] },
    NamedReference { name: "rtrif;", codepoints: [0x25B8, 0x0000] },
    NamedReference { name: "rtriltri;", codepoints: [0x29CE, 0x0000] },
    NamedReference { name: "ruluhar;", codepoints: [0x2968, 0x0000] },
    NamedReference { name: "rx;", codepoints: [0x211E, 0x0000] },
    NamedReference { name: "sacute;", codepoints: [0x015B, 0x0000] },
    NamedReference { name: "sbquo;", codepoints: [0x201A, 0x0000] },
    NamedReference { name: "sc;", codepoints: [0x227B, 0x0000] },
    NamedReference { name: "scE;", codepoints: [0x2AB4, 0x0000] },
    NamedReference { name: "scap;", codepoints: [0x2AB8, 0x0000] },
    NamedReference { name: "scaron;", codepoints: [0x0161, 0x0000] },
    NamedReference { name: "sccue;", codepoints: [0x227D, 0x0000] },
    NamedReference { name: "sce;", codepoints: [0x2AB0, 0x0000] },
    NamedReference { name: "scedil;", codepoints: [0x015F, 0x0000] },
    NamedReference { name: "scirc;", codepoints: [0x015D, 0x0000] },
    NamedReference { name: "scnE;", codepoints: [0x2AB6, 0x0000] },
    NamedReference { name: "scnap;", codepoints: [0x2ABA, 0x0000] },
    NamedReference { name: "scnsim;", codepoints: [0x22E9, 0x0000] },
    NamedReference { name: "scpolint;", codepoints: [0x2A13, 0x0000] },
    NamedReference { name: "scsim;", codepoints: [0x227F, 0x0000] },
    NamedReference { name: "scy;", codepoints: [0x0441, 0x0000] },
    NamedReference { name: "sdot;", codepoints: [0x22C5, 0x0000] },
    NamedReference { name: "sdotb;", codepoints: [0x22A1, 0x0000] },
    NamedReference { name: "sdote;", codepoints: [0x2A66, 0x0000] },
    NamedReference { name: "seArr;", codepoints: [0x21D8, 0x0000] },
    NamedReference { name: "searhk;", codepoints: [0x2925, 0x0000] },
    NamedReference { name: "searr;", codepoints: [0x2198, 0x0000] },
    NamedReference { name: "searrow;", codepoints: [0x2198, 0x0000] },
    NamedReference { name: "sect", codepoints: [0x00A7, 0x0000] },
    NamedReference { name: "sect;", codepoints: [0x00A7, 0x0000] },
    NamedReference { name: "semi;", codepoints: [0x003B, 0x0000] },
    NamedReference { name: "seswar;", codepoints: [0x2929, 0x0000] },
    NamedReference { name: "setminus;", codepoints: [0x2216, 0x0000] },
    NamedReference { name: "setmn;", codepoints: [0x2216, 0x0000] },
    NamedReference { name: "sext;", codepoints: [0x2736, 0x0000] },
    NamedReference { name: "sfr;", codepoints: [0x1D530, 0x0000] },
    NamedReference { name: "sfrown;", codepoints: [0x2322, 0x0000] },
    NamedReference { name: "sharp;", codepoints: [0x266F, 0x0000] },
    NamedReference { name: "shchcy;", codepoints: [0x0449, 0x0000] },
    NamedReference { name: "shcy;", codepoints: [0x0448, 0x0000] },
    NamedReference { name: "shortmid;", codepoints: [0x2223, 0x0000] },
    NamedReference { name: "shortparallel;", codepoints: [0x2225, 0x0000] },
    NamedReference { name: "shy", codepoints: [0x00AD, 0x0000] },
    NamedReference { name: "shy;", codepoints: [0x00AD, 0x0000] },
    NamedReference { name: "sigma;", codepoints: [0x03C3, 0x0000] },
    NamedReference { name: "sigmaf;", codepoints: [0x03C2, 0x0000] },
    NamedReference { name: "sigmav;", codepoints: [0x03C2, 0x0000] },
    NamedReference { name: "sim;", codepoints: [0x223C, 0x0000] },
    NamedReference { name: "simdot;", codepoints: [0x2A6A, 0x0000] },
    NamedReference { name: "sime;", codepoints: [0x2243, 0x0000] },
    NamedReference { name: "simeq;", codepoints: [0x2243, 0x0000] },
    NamedReference { name: "simg;", codepoints: [0x2A9E, 0x0000] },
    NamedReference { name: "simgE;", codepoints: [0x2AA0, 0x0000] },
    NamedReference { name: "siml;", codepoints: [0x2A9D, 0x0000] },
    NamedReference { name: "simlE;", codepoints: [0x2A9F, 0x0000] },
    NamedReference { name: "simne;", codepoints: [0x2246, 0x0000] },
    NamedReference { name: "simplus;", codepoints: [0x2A24, 0x0000] },
    NamedReference { name: "simrarr;", codepoints: [0x2972, 0x0000] },
    NamedReference { name: "slarr;", codepoints: [0x2190, 0x0000] },
    NamedReference { name: "smallsetminus;", codepoints: [0x2216, 0x0000] },
    NamedReference { name: "smashp;", codepoints: [0x2A33, 0x0000] },
    NamedReference { name: "smeparsl;", codepoints: [0x29E4, 0x0000] },
    NamedReference { name: "smid;", codepoints: [0x2223, 0x0000] },
    NamedReference { name: "smile;", codepoints: [0x2323, 0x0000] },
    NamedReference { name: "smt;", codepoints: [0x2AAA, 0x0000] },
    NamedReference { name: "smte;", codepoints: [0x2AAC, 0x0000] },
    NamedReference { name: "smtes;", codepoints: [0x2AAC, 0xFE00] },
    NamedReference { name: "softcy;", codepoints: [0x044C, 0x0000] },
    NamedReference { name: "sol;", codepoints: [0x002F, 0x0000] },
    NamedReference { name: "solb;", codepoints: [0x29C4, 0x0000] },
    NamedReference { name: "solbar;", codepoints: [0x233F, 0x0000] },
    NamedReference { name: "sopf;", codepoints: [0x1D564, 0x0000] },
    NamedReference { name: "spades;", codepoints: [0x2660, 0x0000] },
    NamedReference { name: "spadesuit;", codepoints: [0x2660, 0x0000] },
    NamedReference { name: "spar;", codepoints: [0x2225, 0x0000] },
    NamedReference { name: "sqcap;", codepoints: [0x2293, 0x0000] },
    NamedReference { name: "sqcaps;", codepoints: [0x2293, 0xFE00] },
    NamedReference { name: "sqcup;", codepoints: [0x2294, 0x0000] },
    NamedReference { name: "sqcups;", codepoints: [0x2294, 0xFE00] },
    NamedReference { name: "sqsub;", codepoints: [0x228F, 0x0000] },
    NamedReference { name: "sqsube;", codepoints: [0x2291, 0x0000] },
    NamedReference { name: "sqsubset;", codepoints: [0x228F, 0x0000] },
    NamedReference { name: "sqsubseteq;", codepoints: [0x2291, 0x0000] },
    NamedReference { name: "sqsup;", codepoints: [0x2290, 0x0000] },
    NamedReference { name: "sqsupe;", codepoints: [0x2292, 0x0000] },
    NamedReference { name: "sqsupset;", codepoints: [0x2290, 0x0000] },
    NamedReference { name: "sqsupseteq;", codepoints: [0x2292, 0x0000] },
    NamedReference { name: "squ;", codepoints: [0x25A1, 0x0000] },
    NamedReference { name: "square;", codepoints: [0x25A1, 0x0000] },
    NamedReference { name: "squarf;", codepoints: [0x25AA, 0x0000] },
    NamedReference { name: "squf;", codepoints: [0x25AA, 0x0000] },
    NamedReference { name: "srarr;", codepoints: [0x2192, 0x0000] },
    NamedReference { name: "sscr;", codepoints: [0x1D4C8, 0x0000] },
    NamedReference { name: "ssetmn;", codepoints: [0x2216, 0x0000] },
    NamedReference { name: "ssmile;", codepoints: [0x2323, 0x0000] },
    NamedReference { name: "sstarf;", codepoints: [0x22C6, 0x0000] },
    NamedReference { name: "star;", codepoints: [0x2606, 0x0000] },
    NamedReference { name: "starf;", codepoints: [0x2605, 0x0000] },
    NamedReference { name: "straightepsilon;", codepoints: [0x03F5, 0x0000] },
    NamedReference { name: "straightphi;", codepoints: [0x03D5, 0x0000] },
    NamedReference { name: "strns;", codepoints: [0x00AF, 0x0000] },
    NamedReference { name: "sub;", codepoints: [0x2282, 0x0000] },
    NamedReference { name: "subE;", codepoints: [0x2AC5, 0x0000] },
    NamedReference { name: "subdot;", codepoints: [0x2ABD, 0x0000] },
    NamedReference { name: "sube;", codepoints: [0x2286, 0x0000] },
    NamedReference { name: "subedot;", codepoints: [0x2AC3, 0x0000] },
    NamedReference { name: "submult;", codepoints: [0x2AC1, 0x0000] },
    NamedReference { name: "subnE;", codepoints: [0x2ACB, 0x0000] },
    NamedReference { name: "subne;", codepoints: [0x228A, 0x0000] },
    NamedReference { name: "subplus;", codepoints: [0x2ABF, 0x0000] },
    NamedReference { name: "subrarr;", codepoints: [0x2979, 0x0000] },
    NamedReference { name: "subset;", codepoints: [0x2282, 0x0000] },
    NamedReference { name: "subseteq;", codepoints: [0x2286, 0x0000] },
    NamedReference { name: "subseteqq;", codepoints: [0x2AC5, 0x0000] },
    NamedReference { name: "subsetneq;", codepoints: [0x228A, 0x0000] },
    NamedReference { name: "subsetneqq;", codepoints: [0x2ACB, 0x0000] },
    NamedReference { name: "subsim;", codepoints: [0x2AC7, 0x0000] },
    NamedReference { name: "subsub;", codepoints: [0x2AD5, 0x0000] },
    NamedReference { name: "subsup;", codepoints: [0x2AD3, 0x0000] },
    NamedReference { name: "succ;", codepoints: [0x227B, 0x0000] },
    NamedReference { name: "succapprox;", codepoints: [0x2AB8, 0x0000] },
    NamedReference { name: "succcurlyeq;", codepoints: [0x227D, 0x0000] },
    NamedReference { name: "succeq;", codepoints: [0x2AB0, 0x0000] },
    NamedReference { name: "succnapprox;", codepoints: [0x2ABA, 0x0000] },
    NamedReference { name: "succneqq;", codepoints: [0x2AB6, 0x0000] },
    NamedReference { name: "succnsim;", codepoints: [0x22E9, 0x0000] },
    NamedReference { name: "succsim;", codepoints: [0x227F, 0x0000] },
    NamedReference { name: "sum;", codepoints: [0x2211, 0x0000] },
    NamedReference { name: "sung;", codepoints: [0x266A, 0x0000] },
    NamedReference { name: "sup1", codepoints: [0x00B9, 0x0000] },
    NamedReference { name: "sup1;", codepoints: [0x00B9, 0x0000] },
    NamedReference { name: "sup2", codepoints: [0x00B2, 0x0000] },
    NamedReference { name: "sup2;", codepoints: [0x00B2, 0x0000] },
    NamedReference { name: "sup3", codepoints: [0x00B3, 0x0000] },
    NamedReference { name: "sup3;", codepoints: [0x00B3, 0x0000] },
    NamedReference { name: "sup;", codepoints: [0x2283, 0x0000] },
    NamedReference { name: "supE;", codepoints: [0x2AC6, 0x0000] },
    NamedReference { name: "supdot;", codepoints: [0x2ABE, 0x0000] },
    NamedReference { name: "supdsub;", codepoints: [0x2AD8, 0x0000] },
    NamedReference { name: "supe;", codepoints: [0x2287, 0x0000] },
    NamedReference { name: "supedot;", codepoints: [0x2AC4, 0x0000] },
    NamedReference { name: "suphsol;", codepoints: [0x27C9, 0x0000] },
    NamedReference { name: "suphsub;", codepoints: [0x2AD7, 0x0000] },
    NamedReference { name: "suplarr;", codepoints: [0x297B, 0x0000] },
    NamedReference { name: "supmult;", codepoints: [0x2AC2, 0x0000] },
    NamedReference { name: "supnE;", codepoints: [0x2ACC, 0x0000] },
    NamedReference { name: "supne;", codepoints: [0x228B, 0x0000] },
    NamedReference { name: "supplus;", codepoints: [0x2AC0, 0x0000] },
    NamedReference { name: "supset;", codepoints: [0x2283, 0x0000] },
    NamedReference { name: "supseteq;", codepoints: [0x2287, 0x0000] },
    NamedReference { name: "supseteqq;", codepoints: [0x2AC6, 0x0000] },
    NamedReference { name: "supsetneq;", codepoints: [0x228B, 0x0000] },
    NamedReference { name: "supsetneqq;", codepoints: [0x2ACC, 0x0000] },
    NamedReference { name: "supsim;", codepoints: [0x2AC8, 0x0000] },
    NamedReference { name: "supsub;", codepoints: [0x2AD4, 0x0000] },
    NamedReference { name: "supsup;", codepoints: [0x2AD6, 0x0000] },
    NamedReference { name: "swArr;", codepoints: [0x21D9, 0x0000] },
    NamedReference { name: "swarhk;", codepoints: [0x2926, 0x0000] },
    NamedReference { name: "swarr;", codepoints: [0x2199, 0x0000] },
    NamedReference { name: "swarrow;", codepoints: [0x2199, 0x0000] },
    NamedReference { name: "swnwar;", codepoints: [0x292A, 0x0000] },
    NamedReference { name: "szlig", codepoints: [0x00DF, 0x0000] },
    NamedReference { name: "szlig;", codepoints: [0x00DF, 0x0000] },
    NamedReference { name: "target;", codepoints: [0x2316, 0x0000] },
    NamedReference { name: "tau;", codepoints: [0x03C4, 0x0000] },
    NamedReference { name: "tbrk;", codepoints: [0x23B4, 0x0000] },
    NamedReference { name: "tcaron;", codepoints: [0x0165, 0x0000] },
    NamedReference { name: "tcedil;", codepoints: [0x0163, 0x0000] },
    NamedReference { name: "tcy;", codepoints: [0x0442, 0x0000] },
    NamedReference { name: "tdot;", codepoints: [0x20DB, 0x0000] },
    NamedReference { name: "telrec;", codepoints: [0x2315, 0x0000] },
    NamedReference { name: "tfr;", codepoints: [0x1D531, 0x0000] },
    NamedReference { name: "there4;", codepoints: [0x2234, 0x0000] },
    NamedReference { name: "therefore;", codepoints: [0x2234, 0x0000] },
    NamedReference { name: "theta;", codepoints: [0x03B8, 0x0000] },
    NamedReference { name: "thetasym;", codepoints: [0x03D1, 0x0000] },
    NamedReference { name: "thetav;", codepoints: [0x03D1, 0x0000] },
    NamedReference { name: "thickapprox;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "thicksim;", codepoints: [0x223C, 0x0000] },
    NamedReference { name: "thinsp;", codepoints: [0x2009, 0x0000] },
    NamedReference { name: "thkap;", codepoints: [0x2248, 0x0000] },
    NamedReference { name: "thksim;", codepoints: [0x223C, 0x0000] },
    NamedReference { name: "thorn", codepoints: [0x00FE, 0x0000] },
    NamedReference { name: "thorn;", codepoints: [0x00FE, 0x0000] },
    NamedReference { name: "tilde;", codepoints: [0x02DC, 0x0000] },
    NamedReference { name: "times", codepoints: [0x00D7, 0x0000] },
    NamedReference { name: "times;", codepoints: [0x00D7, 0x0000] },
    NamedReference { name: "timesb;", codepoints: [0x22A0, 0x0000] },
    NamedReference { name: "timesbar;", codepoints: [0x2A31, 0x0000] },
    NamedReference { name: "timesd;", codepoints: [0x2A30, 0x0000] },
    NamedReference { name: "tint;", codepoints: [0x222D, 0x0000] },
    NamedReference { name: "toea;", codepoints: [0x2928, 0x0000] },
    NamedReference { name: "top;", codepoints: [0x22A4, 0x0000] },
    NamedReference { name: "topbot;", codepoints: [0x2336, 0x0000] },
    NamedReference { name: "topcir;", codepoints: [0x2AF1, 0x0000] },
    NamedReference { name: "topf;", codepoints: [0x1D565, 0x0000] },
    NamedReference { name: "topfork;", codepoints: [0x2ADA, 0x0000] },
    NamedReference { name: "tosa;", codepoints: [0x2929, 0x0000] },
    NamedReference { name: "tprime;", codepoints: [0x2034, 0x0000] },
    NamedReference { name: "trade;", codepoints: [0x2122, 0x0000] },
    NamedReference { name: "triangle;", codepoints: [0x25B5, 0x0000] },
    NamedReference { name: "triangledown;", codepoints: [0x25BF, 0x0000] },
    NamedReference { name: "triangleleft;", codepoints: [0x25C3, 0x0000] },
    NamedReference { name: "trianglelefteq;", codepoints: [0x22B4, 0x0000] },
    NamedReference { name: "triangleq;", codepoints: [0x225C, 0x0000] },
    NamedReference { name: "triangleright;", codepoints: [0x25B9, 0x0000] },
    NamedReference { name: "trianglerighteq;", codepoints: [0x22B5, 0x0000] },
    NamedReference { name: "tridot;", codepoints: [0x25EC, 0x0000] },
    NamedReference { name: "trie;", codepoints: [0x225C, 0x0000] },
    NamedReference { name: "triminus;", codepoints: [0x2A3A, 0x0000] },
    NamedReference { name: "triplus;", codepoints: [0x2A39, 0x0000] },
    NamedReference { name: "trisb;", codepoints: [0x29CD, 0x0000] },
    NamedReference { name: "tritime;", codepoints: [0x2A3B, 0x0000] },
    NamedReference { name: "trpezium;", codepoints: [0x23E2, 0x0000] },
    NamedReference { name: "tscr;", codepoints: [0x1D4C9, 0x0000] },
    NamedReference { name: "tscy;", codepoints: [0x0446, 0x0000] },
    NamedReference { name: "tshcy;", codepoints: [0x045B, 0x0000] },
    NamedReference { name: "tstrok;", codepoints: [0x0167, 0x0000] },
    NamedReference { name: "twixt;", codepoints: [0x226C, 0x0000] },
    NamedReference { name: "twoheadleftarrow;", codepoints: [0x219E, 0x0000] },
    NamedReference { name: "twoheadrightarrow;", codepoints: [0x21A0, 0x0000] },
    NamedReference { name: "uArr;", codepoints: [0x21D1, 0x0000] },
    NamedReference { name: "uHar;", codepoints: [0x2963, 0x0000] },
    NamedReference { name: "uacute", codepoints: [0x00FA, 0x0000] },
    NamedReference { name: "uacute;", codepoints: [0x00FA, 0x0000] },
    NamedReference { name: "uarr;", codepoints: [0x2191, 0x0000] },
    NamedReference { name: "ubrcy;", codepoints: [0x045E, 0x0000] },
    NamedReference { name: "ubreve;", codepoints: [0x016D, 0x0000] },
    NamedReference { name: "ucirc", codepoints: [0x00FB, 0x0000] },
    NamedReference { name: "ucirc;", codepoints: [0x00FB, 0x0000] },
    NamedReference { name: "ucy;", codepoints: [0x0443, 0x0000] },
    NamedReference { name: "udarr;", codepoints: [0x21C5, 0x0000] },
    NamedReference { name: "udblac;", codepoints: [0x0171, 0x0000] },
    NamedReference { name: "udhar;", codepoints: [0x296E, 0x0000] },
    NamedReference { name: "ufisht;", codepoints: [0x297E, 0x0000] },
    NamedReference { name: "ufr;", codepoints: [0x1D532, 0x0000] },
    NamedReference { name: "ugrave", codepoints: [0x00F9, 0x0000] },
    NamedReference { name: "ugrave;", codepoints: [0x00F9, 0x0000] },
    NamedReference { name: "uharl;", codepoints: [0x21BF, 0x0000] },
    NamedReference { name: "uharr;", codepoints: [0x21BE, 0x0000] },
    NamedReference { name: "uhblk;", codepoints: [0x2580, 0x0000] },
    NamedReference { name: "ulcorn;", codepoints: [0x231C, 0x0000] },
    NamedReference { name: "ulcorner;", codepoints: [0x231C, 0x0000] },
    NamedReference { name: "ulcrop;", codepoints: [0x230F, 0x0000] },
    NamedReference { name: "ultri;", codepoints: [0x25F8, 0x0000] },
    NamedReference { name: "umacr;", codepoints: [0x016B, 0x0000] },
    NamedReference { name: "uml", codepoints: [0x00A8, 0x0000] },
    NamedReference { name: "uml;", codepoints: [0x00A8, 0x0000] },
    NamedReference { name: "uogon;", codepoints: [0x0173, 0x0000] },
    NamedReference { name: "uopf;", codepoints: [0x1D566, 0x0000] },
    NamedReference { name: "uparrow;", codepoints: [0x2191, 0x0000] },
    NamedReference { name: "updownarrow;", codepoints: [0x2195, 0x0000] },
    NamedReference { name: "upharpoonleft;", codepoints: [0x21BF, 0x0000] },
    NamedReference { name: "upharpoonright;", codepoints: [0x21BE, 0x0000] },
    NamedReference { name: "uplus;", codepoints: [0x228E, 0x0000] },
    NamedReference { name: "upsi;", codepoints: [0x03C5, 0x0000] },
    NamedReference { name: "upsih;", codepoints: [0x03D2, 0x0000] },
    NamedReference { name: "upsilon;", codepoints: [0x03C5, 0x0000] },
    NamedReference { name: "upuparrows;", codepoints: [0x21C8, 0x0000] },
    NamedReference { name: "urcorn;", codepoints: [0x231D, 0x0000] },
    NamedReference { name: "urcorner;", codepoints: [0x231D, 0x0000] },
    NamedReference { name: "urcrop;", codepoints: [0x230E, 0x0000] },
    NamedReference { name: "uring;", codepoints: [0x016F, 0x0000] },
    NamedReference { name: "urtri;", codepoints: [0x25F9, 0x0000] },
    NamedReference { name: "uscr;", codepoints: [0x1D4CA, 0x0000] },
    NamedReference { name: "utdot;", codepoints: [0x22F0, 0x0000] },
    NamedReference { name: "utilde;", codepoints: [0x0169, 0x0000] },
    NamedReference { name: "utri;", codepoints: [0x25B5, 0x0000] },
    NamedReference { name: "utrif;", codepoints: [0x25B4, 0x0000] },
    NamedReference { name: "uuarr;", codepoints: [0x21C8, 0x0000] },
    NamedReference { name: "uuml", codepoints: [0x00FC, 0x0000] },
    NamedReference { name: "uuml;", codepoints: [0x00FC, 0x0000] },
    NamedReference { name: "uwangle;", codepoints: [0x29A7, 0x0000] },
    NamedReference { name: "vArr;", codepoints: [0x21D5, 0x0000] },
    NamedReference { name: "vBar;", codepoints: [0x2AE8, 0x0000] },
    NamedReference { name: "vBarv;", codepoints: [0x2AE9, 0x0000] },
    NamedReference { name: "vDash;", codepoints: [0x22A8, 0x0000] },
    NamedReference { name: "vangrt;", codepoints: [0x299C, 0x0000] },
    NamedReference { name: "varepsilon;", codepoints: [0x03F5, 0x0000] },
    NamedReference { name: "varkappa;", codepoints: [0x03F0, 0x0000] },
    NamedReference { name: "varnothing;", codepoints: [0x2205, 0x0000] },
    NamedReference { name: "varphi;", codepoints: [0x03D5, 0x0000] },
    NamedReference { name: "varpi;", codepoints: [0x03D6, 0x0000] },
    NamedReference { name: "varpropto;", codepoints: [0x221D, 0x0000] },
    NamedReference { name: "varr;", codepoints: [0x2195, 0x0000] },
    NamedReference { name: "varrho;", codepoints: [0x03F1, 0x0000] },
    NamedReference { name: "varsigma;", codepoints: [0x03C2, 0x0000] },
    NamedReference { name: "varsubsetneq;", codepoints: [0x228A, 0xFE00] },
    NamedReference { name: "varsubsetneqq;", codepoints: [0x2ACB, 0xFE00] },
    NamedReference { name: "varsupsetneq;", codepoints: [0x228B, 0xFE00] },
    NamedReference { name: "varsupsetneqq;", codepoints: [0x2ACC, 0xFE00] },
    NamedReference { name: "vartheta;", codepoints: [0x03D1, 0x0000] },
    NamedReference { name: "vartriangleleft;", codepoints: [0x22B2, 0x0000] },
    NamedReference { name: "vartriangleright;", codepoints: [0x22B3, 0x0000] },
    NamedReference { name: "vcy;", codepoints: [0x0432, 0x0000] },
    NamedReference { name: "vdash;", codepoints: [0x22A2, 0x0000] },
    NamedReference { name: "vee;", codepoints: [0x2228, 0x0000] },
    NamedReference { name: "veebar;", codepoints: [0x22BB, 0x0000] },
    NamedReference { name: "veeeq;", codepoints: [0x225A, 0x0000] },
    NamedReference { name: "vellip;", codepoints: [0x22EE, 0x0000] },
    NamedReference { name: "verbar;", codepoints: [0x007C, 0x0000] },
    NamedReference { name: "vert;", codepoints: [0x007C, 0x0000] },
    NamedReference { name: "vfr;", codepoints: [0x1D533, 0x0000] },
    NamedReference { name: "vltri;", codepoints: [0x22B2, 0x0000] },
    NamedReference { name: "vnsub;", codepoints: [0x2282, 0x20D2] },
    NamedReference { name: "vnsup;", codepoints: [0x2283, 0x20D2] },
    NamedReference { name: "vopf;", codepoints: [0x1D567, 0x0000] },
    NamedReference { name: "vprop;", codepoints: [0x221D, 0x0000] },
    NamedReference { name: "vrtri;", codepoints: [0x22B3, 0x0000] },
    NamedReference { name: "vscr;", codepoints: [0x1D4CB, 0x0000] },
    NamedReference { name: "vsubnE;", codepoints: [0x2ACB, 0xFE00] },
    NamedReference { name: "vsubne;", codepoints: [0x228A, 0xFE00] },
    NamedReference { name: "vsupnE;", codepoints: [0x2ACC, 0xFE00] },
    NamedReference { name: "vsupne;", codepoints: [0x228B, 0xFE00] },
    NamedReference { name: "vzigzag;", codepoints: [0x299A, 0x0000] },
    NamedReference { name: "wcirc;", codepoints: [0x0175, 0x0000] },
    NamedReference { name: "wedbar;", codepoints: [0x2A5F, 0x0000] },
    NamedReference { name: "wedge;", codepoints: [0x2227, 0x0000] },
    NamedReference { name: "wedgeq;", codepoints: [0x2259, 0x0000] },
    NamedReference { name: "weierp;", codepoints: [0x2118, 0x0000] },
    NamedReference { name: "wfr;", codepoints: [0x1D534, 0x0000] },
    NamedReference { name: "wopf;", codepoints: [0x1D568, 0x0000] },
    NamedReference { name: "wp;", codepoints: [0x2118, 0x0000] },
    NamedReference { name: "wr;", codepoints: [0x2240, 0x0000] },
    NamedReference { name: "wreath;", codepoints: [0x2240, 0x0000] },
    NamedReference { name: "wscr;", codepoints: [0x1D4CC, 0x0000] },
    NamedReference { name: "xcap;", codepoints: [0x22C2, 0x0000] },
    NamedReference { name: "xcirc;", codepoints: [0x25EF, 0x0000] },
    NamedReference { name: "xcup;", codepoints: [0x22C3, 0x0000] },
    NamedReference { name: "xdtri;", codepoints: [0x25BD, 0x0000] },
    NamedReference { name: "xfr;", codepoints: [0x1D535, 0x0000] },
    NamedReference { name: "xhArr;", codepoints: [0x27FA, 0x0000] },
    NamedReference { name: "xharr;", codepoints: [0x27F7, 0x0000] },
    NamedReference { name: "xi;", codepoints: [0x03BE, 0x0000] },
    NamedReference { name: "xlArr;", codepoints: [0x27F8, 0x0000] },
    NamedReference { name: "xlarr;", codepoints: [0x27F5, 0x0000] },
    NamedReference { name: "xmap;", codepoints: [0x27FC, 0x0000] },
    NamedReference { name: "xnis;", codepoints: [0x22FB, 0x0000] },
    NamedReference { name: "xodot;", codepoints: [0x2A00, 0x0000] },
    NamedReference { name: "xopf;", codepoints: [0x1D569, 0x0000] },
    NamedReference { name: "xoplus;", codepoints: [0x2A01, 0x0000] },
    NamedReference { name: "xotime;", codepoints: [0x2A02, 0x0000] },
    NamedReference { name: "xrArr;", codepoints: [0x27F9, 0x0000] },
    NamedReference { name: "xrarr;", codepoints: [0x27F6, 0x0000] },
    NamedReference { name: "xscr;", codepoints: [0x1D4CD, 0x0000] },
    NamedReference { name: "xsqcup;", codepoints: [0x2A06, 0x0000] },
    NamedReference { name: "xuplus;", codepoints: [0x2A04, 0x0000] },
    NamedReference { name: "xutri;", codepoints: [0x25B3, 0x0000] },
    NamedReference { name: "xvee;", codepoints: [0x22C1, 0x0000] },
    NamedReference { name: "xwedge;", codepoints: [0x22C0, 0x0000] },
    NamedReference { name: "yacute", codepoints: [0x00FD, 0x0000] },
    NamedReference { name: "yacute;", codepoints: [0x00FD, 0x0000] },
    NamedReference { name: "yacy;", codepoints: [0x044F, 0x0000] },
    NamedReference { name: "ycirc;", codepoints: [0x0177, 0x0000] },
    NamedReference { name: "ycy;", codepoints: [0x044B, 0x0000] },
    NamedReference { name: "yen", codepoints: [0x00A5, 0x0000] },
    NamedReference { name: "yen;", codepoints: [0x00A5, 0x0000] },
    NamedReference { name: "yfr;", codepoints: [0x1D536, 0x0000] },
    NamedReference { name: "yicy;", codepoints: [0x0457, 0x0000] },
    NamedReference { name: "yopf;", codepoints: [0x1D56A, 0x0000] },
    NamedReference { name: "yscr;", codepoints: [0x1D4CE, 0x0000] },
    NamedReference { name: "yucy;", codepoints: [0x044E, 0x0000] },
    NamedReference { name: "yuml", codepoints: [0x00FF, 0x0000] },
    NamedReference { name: "yuml;", codepoints: [0x00FF, 0x0000] },
    NamedReference { name: "zacute;", codepoints: [0x017A, 0x0000] },
    NamedReference { name: "zcaron;", codepoints: [0x017E, 0x0000] },
    NamedReference { name: "zcy;", codepoints: [0x0437, 0x0000] },
    NamedReference { name: "zdot;", codepoints: [0x017C, 0x0000] },
    NamedReference { name: "zeetrf;", codepoints: [0x2128, 0x0000] },
    NamedReference { name: "zeta;", codepoints: [0x03B6, 0x0000] },
    NamedReference { name: "zfr;", codepoints: [0x1D537, 0x0000] },
    NamedReference { name: "zhcy;", codepoints: [0x0436, 0x0000] },
    NamedReference { name: "zigrarr;", codepoints: [0x21DD, 0x0000] },
    NamedReference { name: "zopf;", codepoints: [0x1D56B, 0x0000] },
    NamedReference { name: "zscr;", codepoints: [0x1D4CF, 0x0000] },
    NamedReference { name: "zwj;", codepoints: [0x200D, 0x0000] },
    NamedReference { name: "zwnj;", codepoints: [0x200C, 0x0000] },
];
