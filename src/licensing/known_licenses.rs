// Code generated by generate-known-licenses. DO NOT EDIT.

/// Bazel `license_kind` targets, keyed by the license ID they describe.
pub(crate) static KNOWN_LICENSES: &[(&str, &str)] = &[
    ("Adobe", "@rules_conda//licensing/known:Adobe"),
    ("Biopython", "@rules_conda//licensing/known:Biopython"),
    ("Commercial", "@rules_conda//licensing/known:Commercial"),
    ("HDF5", "@rules_conda//licensing/known:HDF5"),
    ("UFL-1.0", "@rules_conda//licensing/known:UFL-1.0"),
    ("cuDNN", "@rules_conda//licensing/known:cuDNN"),
    ("0BSD", "@rules_license//licenses/spdx:0BSD"),
    ("AAL", "@rules_license//licenses/spdx:AAL"),
    ("ADSL", "@rules_license//licenses/spdx:ADSL"),
    ("AFL-1.1", "@rules_license//licenses/spdx:AFL-1.1"),
    ("AFL-1.2", "@rules_license//licenses/spdx:AFL-1.2"),
    ("AFL-2.0", "@rules_license//licenses/spdx:AFL-2.0"),
    ("AFL-2.1", "@rules_license//licenses/spdx:AFL-2.1"),
    ("AFL-3.0", "@rules_license//licenses/spdx:AFL-3.0"),
    ("AGPL-1.0", "@rules_license//licenses/spdx:AGPL-1.0"),
    ("AGPL-1.0-only", "@rules_license//licenses/spdx:AGPL-1.0-only"),
    ("AGPL-1.0-or-later", "@rules_license//licenses/spdx:AGPL-1.0-or-later"),
    ("AGPL-3.0", "@rules_license//licenses/spdx:AGPL-3.0"),
    ("AGPL-3.0-only", "@rules_license//licenses/spdx:AGPL-3.0-only"),
    ("AGPL-3.0-or-later", "@rules_license//licenses/spdx:AGPL-3.0-or-later"),
    ("AMDPLPA", "@rules_license//licenses/spdx:AMDPLPA"),
    ("AML", "@rules_license//licenses/spdx:AML"),
    ("AMPAS", "@rules_license//licenses/spdx:AMPAS"),
    ("ANTLR-PD", "@rules_license//licenses/spdx:ANTLR-PD"),
    ("APAFML", "@rules_license//licenses/spdx:APAFML"),
    ("APL-1.0", "@rules_license//licenses/spdx:APL-1.0"),
    ("APSL-1.0", "@rules_license//licenses/spdx:APSL-1.0"),
    ("APSL-1.1", "@rules_license//licenses/spdx:APSL-1.1"),
    ("APSL-1.2", "@rules_license//licenses/spdx:APSL-1.2"),
    ("APSL-2.0", "@rules_license//licenses/spdx:APSL-2.0"),
    ("Abstyles", "@rules_license//licenses/spdx:Abstyles"),
    ("Adobe-2006", "@rules_license//licenses/spdx:Adobe-2006"),
    ("Adobe-Glyph", "@rules_license//licenses/spdx:Adobe-Glyph"),
    ("Afmparse", "@rules_license//licenses/spdx:Afmparse"),
    ("Aladdin", "@rules_license//licenses/spdx:Aladdin"),
    ("Apache-1.0", "@rules_license//licenses/spdx:Apache-1.0"),
    ("Apache-1.1", "@rules_license//licenses/spdx:Apache-1.1"),
    ("Apache-2.0", "@rules_license//licenses/spdx:Apache-2.0"),
    ("Artistic-1.0", "@rules_license//licenses/spdx:Artistic-1.0"),
    ("Artistic-1.0-Perl", "@rules_license//licenses/spdx:Artistic-1.0-Perl"),
    ("Artistic-1.0-cl8", "@rules_license//licenses/spdx:Artistic-1.0-cl8"),
    ("Artistic-2.0", "@rules_license//licenses/spdx:Artistic-2.0"),
    ("BSD-1-Clause", "@rules_license//licenses/spdx:BSD-1-Clause"),
    ("BSD-2-Clause", "@rules_license//licenses/spdx:BSD-2-Clause"),
    ("BSD-2-Clause-FreeBSD", "@rules_license//licenses/spdx:BSD-2-Clause-FreeBSD"),
    ("BSD-2-Clause-NetBSD", "@rules_license//licenses/spdx:BSD-2-Clause-NetBSD"),
    ("BSD-2-Clause-Patent", "@rules_license//licenses/spdx:BSD-2-Clause-Patent"),
    ("BSD-2-Clause-Views", "@rules_license//licenses/spdx:BSD-2-Clause-Views"),
    ("BSD-3-Clause", "@rules_license//licenses/spdx:BSD-3-Clause"),
    ("BSD-3-Clause-Attribution", "@rules_license//licenses/spdx:BSD-3-Clause-Attribution"),
    ("BSD-3-Clause-Clear", "@rules_license//licenses/spdx:BSD-3-Clause-Clear"),
    ("BSD-3-Clause-LBNL", "@rules_license//licenses/spdx:BSD-3-Clause-LBNL"),
    ("BSD-3-Clause-Modification", "@rules_license//licenses/spdx:BSD-3-Clause-Modification"),
    ("BSD-3-Clause-No-Nuclear-License", "@rules_license//licenses/spdx:BSD-3-Clause-No-Nuclear-License"),
    ("BSD-3-Clause-No-Nuclear-License-2014", "@rules_license//licenses/spdx:BSD-3-Clause-No-Nuclear-License-2014"),
    ("BSD-3-Clause-No-Nuclear-Warranty", "@rules_license//licenses/spdx:BSD-3-Clause-No-Nuclear-Warranty"),
    ("BSD-3-Clause-Open-MPI", "@rules_license//licenses/spdx:BSD-3-Clause-Open-MPI"),
    ("BSD-4-Clause", "@rules_license//licenses/spdx:BSD-4-Clause"),
    ("BSD-4-Clause-UC", "@rules_license//licenses/spdx:BSD-4-Clause-UC"),
    ("BSD-Protection", "@rules_license//licenses/spdx:BSD-Protection"),
    ("BSD-Source-Code", "@rules_license//licenses/spdx:BSD-Source-Code"),
    ("BSL-1.0", "@rules_license//licenses/spdx:BSL-1.0"),
    ("BUSL-1.1", "@rules_license//licenses/spdx:BUSL-1.1"),
    ("Bahyph", "@rules_license//licenses/spdx:Bahyph"),
    ("Barr", "@rules_license//licenses/spdx:Barr"),
    ("Beerware", "@rules_license//licenses/spdx:Beerware"),
    ("BitTorrent-1.0", "@rules_license//licenses/spdx:BitTorrent-1.0"),
    ("BitTorrent-1.1", "@rules_license//licenses/spdx:BitTorrent-1.1"),
    ("BlueOak-1.0.0", "@rules_license//licenses/spdx:BlueOak-1.0.0"),
    ("Borceux", "@rules_license//licenses/spdx:Borceux"),
    ("CAL-1.0", "@rules_license//licenses/spdx:CAL-1.0"),
    ("CATOSL-1.1", "@rules_license//licenses/spdx:CATOSL-1.1"),
    ("CC-BY-1.0", "@rules_license//licenses/spdx:CC-BY-1.0"),
    ("CC-BY-2.0", "@rules_license//licenses/spdx:CC-BY-2.0"),
    ("CC-BY-2.5", "@rules_license//licenses/spdx:CC-BY-2.5"),
    ("CC-BY-3.0", "@rules_license//licenses/spdx:CC-BY-3.0"),
    ("CC-BY-4.0", "@rules_license//licenses/spdx:CC-BY-4.0"),
    ("CC-BY-NC-4.0", "@rules_license//licenses/spdx:CC-BY-NC-4.0"),
    ("CC-BY-NC-ND-4.0", "@rules_license//licenses/spdx:CC-BY-NC-ND-4.0"),
    ("CC-BY-NC-SA-4.0", "@rules_license//licenses/spdx:CC-BY-NC-SA-4.0"),
    ("CC-BY-ND-4.0", "@rules_license//licenses/spdx:CC-BY-ND-4.0"),
    ("CC-BY-SA-3.0", "@rules_license//licenses/spdx:CC-BY-SA-3.0"),
    ("CC-BY-SA-4.0", "@rules_license//licenses/spdx:CC-BY-SA-4.0"),
    ("CC-PDDC", "@rules_license//licenses/spdx:CC-PDDC"),
    ("CC0-1.0", "@rules_license//licenses/spdx:CC0-1.0"),
    ("CDDL-1.0", "@rules_license//licenses/spdx:CDDL-1.0"),
    ("CDDL-1.1", "@rules_license//licenses/spdx:CDDL-1.1"),
    ("CDLA-Permissive-1.0", "@rules_license//licenses/spdx:CDLA-Permissive-1.0"),
    ("CDLA-Permissive-2.0", "@rules_license//licenses/spdx:CDLA-Permissive-2.0"),
    ("CDLA-Sharing-1.0", "@rules_license//licenses/spdx:CDLA-Sharing-1.0"),
    ("CECILL-1.0", "@rules_license//licenses/spdx:CECILL-1.0"),
    ("CECILL-1.1", "@rules_license//licenses/spdx:CECILL-1.1"),
    ("CECILL-2.0", "@rules_license//licenses/spdx:CECILL-2.0"),
    ("CECILL-2.1", "@rules_license//licenses/spdx:CECILL-2.1"),
    ("CECILL-B", "@rules_license//licenses/spdx:CECILL-B"),
    ("CECILL-C", "@rules_license//licenses/spdx:CECILL-C"),
    ("CERN-OHL-1.1", "@rules_license//licenses/spdx:CERN-OHL-1.1"),
    ("CERN-OHL-1.2", "@rules_license//licenses/spdx:CERN-OHL-1.2"),
    ("CNRI-Jython", "@rules_license//licenses/spdx:CNRI-Jython"),
    ("CNRI-Python", "@rules_license//licenses/spdx:CNRI-Python"),
    ("CNRI-Python-GPL-Compatible", "@rules_license//licenses/spdx:CNRI-Python-GPL-Compatible"),
    ("CPAL-1.0", "@rules_license//licenses/spdx:CPAL-1.0"),
    ("CPL-1.0", "@rules_license//licenses/spdx:CPL-1.0"),
    ("CPOL-1.02", "@rules_license//licenses/spdx:CPOL-1.02"),
    ("CUA-OPL-1.0", "@rules_license//licenses/spdx:CUA-OPL-1.0"),
    ("Caldera", "@rules_license//licenses/spdx:Caldera"),
    ("ClArtistic", "@rules_license//licenses/spdx:ClArtistic"),
    ("Condor-1.1", "@rules_license//licenses/spdx:Condor-1.1"),
    ("Crossword", "@rules_license//licenses/spdx:Crossword"),
    ("CrystalStacker", "@rules_license//licenses/spdx:CrystalStacker"),
    ("Cube", "@rules_license//licenses/spdx:Cube"),
    ("D-FSL-1.0", "@rules_license//licenses/spdx:D-FSL-1.0"),
    ("DOC", "@rules_license//licenses/spdx:DOC"),
    ("DSDP", "@rules_license//licenses/spdx:DSDP"),
    ("Dotseqn", "@rules_license//licenses/spdx:Dotseqn"),
    ("ECL-1.0", "@rules_license//licenses/spdx:ECL-1.0"),
    ("ECL-2.0", "@rules_license//licenses/spdx:ECL-2.0"),
    ("EFL-1.0", "@rules_license//licenses/spdx:EFL-1.0"),
    ("EFL-2.0", "@rules_license//licenses/spdx:EFL-2.0"),
    ("EPICS", "@rules_license//licenses/spdx:EPICS"),
    ("EPL-1.0", "@rules_license//licenses/spdx:EPL-1.0"),
    ("EPL-2.0", "@rules_license//licenses/spdx:EPL-2.0"),
    ("EUDatagrid", "@rules_license//licenses/spdx:EUDatagrid"),
    ("EUPL-1.0", "@rules_license//licenses/spdx:EUPL-1.0"),
    ("EUPL-1.1", "@rules_license//licenses/spdx:EUPL-1.1"),
    ("EUPL-1.2", "@rules_license//licenses/spdx:EUPL-1.2"),
    ("Entessa", "@rules_license//licenses/spdx:Entessa"),
    ("ErlPL-1.1", "@rules_license//licenses/spdx:ErlPL-1.1"),
    ("Eurosym", "@rules_license//licenses/spdx:Eurosym"),
    ("FSFAP", "@rules_license//licenses/spdx:FSFAP"),
    ("FSFUL", "@rules_license//licenses/spdx:FSFUL"),
    ("FSFULLR", "@rules_license//licenses/spdx:FSFULLR"),
    ("FTL", "@rules_license//licenses/spdx:FTL"),
    ("Fair", "@rules_license//licenses/spdx:Fair"),
    ("Frameworx-1.0", "@rules_license//licenses/spdx:Frameworx-1.0"),
    ("FreeImage", "@rules_license//licenses/spdx:FreeImage"),
    ("GD", "@rules_license//licenses/spdx:GD"),
    ("GFDL-1.1", "@rules_license//licenses/spdx:GFDL-1.1"),
    ("GFDL-1.1-only", "@rules_license//licenses/spdx:GFDL-1.1-only"),
    ("GFDL-1.1-or-later", "@rules_license//licenses/spdx:GFDL-1.1-or-later"),
    ("GFDL-1.2", "@rules_license//licenses/spdx:GFDL-1.2"),
    ("GFDL-1.2-only", "@rules_license//licenses/spdx:GFDL-1.2-only"),
    ("GFDL-1.2-or-later", "@rules_license//licenses/spdx:GFDL-1.2-or-later"),
    ("GFDL-1.3", "@rules_license//licenses/spdx:GFDL-1.3"),
    ("GFDL-1.3-only", "@rules_license//licenses/spdx:GFDL-1.3-only"),
    ("GFDL-1.3-or-later", "@rules_license//licenses/spdx:GFDL-1.3-or-later"),
    ("GL2PS", "@rules_license//licenses/spdx:GL2PS"),
    ("GPL-1.0", "@rules_license//licenses/spdx:GPL-1.0"),
    ("GPL-1.0+", "@rules_license//licenses/spdx:GPL-1.0+"),
    ("GPL-1.0-only", "@rules_license//licenses/spdx:GPL-1.0-only"),
    ("GPL-1.0-or-later", "@rules_license//licenses/spdx:GPL-1.0-or-later"),
    ("GPL-2.0", "@rules_license//licenses/spdx:GPL-2.0"),
    ("GPL-2.0+", "@rules_license//licenses/spdx:GPL-2.0+"),
    ("GPL-2.0-only", "@rules_license//licenses/spdx:GPL-2.0-only"),
    ("GPL-2.0-or-later", "@rules_license//licenses/spdx:GPL-2.0-or-later"),
    ("GPL-2.0-with-GCC-exception", "@rules_license//licenses/spdx:GPL-2.0-with-GCC-exception"),
    ("GPL-2.0-with-autoconf-exception", "@rules_license//licenses/spdx:GPL-2.0-with-autoconf-exception"),
    ("GPL-2.0-with-bison-exception", "@rules_license//licenses/spdx:GPL-2.0-with-bison-exception"),
    ("GPL-2.0-with-classpath-exception", "@rules_license//licenses/spdx:GPL-2.0-with-classpath-exception"),
    ("GPL-2.0-with-font-exception", "@rules_license//licenses/spdx:GPL-2.0-with-font-exception"),
    ("GPL-3.0", "@rules_license//licenses/spdx:GPL-3.0"),
    ("GPL-3.0+", "@rules_license//licenses/spdx:GPL-3.0+"),
    ("GPL-3.0-only", "@rules_license//licenses/spdx:GPL-3.0-only"),
    ("GPL-3.0-or-later", "@rules_license//licenses/spdx:GPL-3.0-or-later"),
    ("GPL-3.0-with-GCC-exception", "@rules_license//licenses/spdx:GPL-3.0-with-GCC-exception"),
    ("GPL-3.0-with-autoconf-exception", "@rules_license//licenses/spdx:GPL-3.0-with-autoconf-exception"),
    ("Giftware", "@rules_license//licenses/spdx:Giftware"),
    ("Glide", "@rules_license//licenses/spdx:Glide"),
    ("Glulxe", "@rules_license//licenses/spdx:Glulxe"),
    ("HPND", "@rules_license//licenses/spdx:HPND"),
    ("HPND-sell-variant", "@rules_license//licenses/spdx:HPND-sell-variant"),
    ("HaskellReport", "@rules_license//licenses/spdx:HaskellReport"),
    ("IBM-pibs", "@rules_license//licenses/spdx:IBM-pibs"),
    ("ICU", "@rules_license//licenses/spdx:ICU"),
    ("IJG", "@rules_license//licenses/spdx:IJG"),
    ("IPA", "@rules_license//licenses/spdx:IPA"),
    ("IPL-1.0", "@rules_license//licenses/spdx:IPL-1.0"),
    ("ISC", "@rules_license//licenses/spdx:ISC"),
    ("ImageMagick", "@rules_license//licenses/spdx:ImageMagick"),
    ("Imlib2", "@rules_license//licenses/spdx:Imlib2"),
    ("Info-ZIP", "@rules_license//licenses/spdx:Info-ZIP"),
    ("Intel", "@rules_license//licenses/spdx:Intel"),
    ("Intel-ACPI", "@rules_license//licenses/spdx:Intel-ACPI"),
    ("Interbase-1.0", "@rules_license//licenses/spdx:Interbase-1.0"),
    ("JPNIC", "@rules_license//licenses/spdx:JPNIC"),
    ("JSON", "@rules_license//licenses/spdx:JSON"),
    ("JasPer-2.0", "@rules_license//licenses/spdx:JasPer-2.0"),
    ("LAL-1.2", "@rules_license//licenses/spdx:LAL-1.2"),
    ("LAL-1.3", "@rules_license//licenses/spdx:LAL-1.3"),
    ("LGPL-2.0", "@rules_license//licenses/spdx:LGPL-2.0"),
    ("LGPL-2.0+", "@rules_license//licenses/spdx:LGPL-2.0+"),
    ("LGPL-2.0-only", "@rules_license//licenses/spdx:LGPL-2.0-only"),
    ("LGPL-2.0-or-later", "@rules_license//licenses/spdx:LGPL-2.0-or-later"),
    ("LGPL-2.1", "@rules_license//licenses/spdx:LGPL-2.1"),
    ("LGPL-2.1+", "@rules_license//licenses/spdx:LGPL-2.1+"),
    ("LGPL-2.1-only", "@rules_license//licenses/spdx:LGPL-2.1-only"),
    ("LGPL-2.1-or-later", "@rules_license//licenses/spdx:LGPL-2.1-or-later"),
    ("LGPL-3.0", "@rules_license//licenses/spdx:LGPL-3.0"),
    ("LGPL-3.0+", "@rules_license//licenses/spdx:LGPL-3.0+"),
    ("LGPL-3.0-only", "@rules_license//licenses/spdx:LGPL-3.0-only"),
    ("LGPL-3.0-or-later", "@rules_license//licenses/spdx:LGPL-3.0-or-later"),
    ("LGPLLR", "@rules_license//licenses/spdx:LGPLLR"),
    ("LPL-1.0", "@rules_license//licenses/spdx:LPL-1.0"),
    ("LPL-1.02", "@rules_license//licenses/spdx:LPL-1.02"),
    ("LPPL-1.0", "@rules_license//licenses/spdx:LPPL-1.0"),
    ("LPPL-1.1", "@rules_license//licenses/spdx:LPPL-1.1"),
    ("LPPL-1.2", "@rules_license//licenses/spdx:LPPL-1.2"),
    ("LPPL-1.3a", "@rules_license//licenses/spdx:LPPL-1.3a"),
    ("LPPL-1.3c", "@rules_license//licenses/spdx:LPPL-1.3c"),
    ("Latex2e", "@rules_license//licenses/spdx:Latex2e"),
    ("Leptonica", "@rules_license//licenses/spdx:Leptonica"),
    ("LiLiQ-P-1.1", "@rules_license//licenses/spdx:LiLiQ-P-1.1"),
    ("LiLiQ-R-1.1", "@rules_license//licenses/spdx:LiLiQ-R-1.1"),
    ("LiLiQ-Rplus-1.1", "@rules_license//licenses/spdx:LiLiQ-Rplus-1.1"),
    ("Libpng", "@rules_license//licenses/spdx:Libpng"),
    ("Linux-OpenIB", "@rules_license//licenses/spdx:Linux-OpenIB"),
    ("MIT", "@rules_license//licenses/spdx:MIT"),
    ("MIT-0", "@rules_license//licenses/spdx:MIT-0"),
    ("MIT-CMU", "@rules_license//licenses/spdx:MIT-CMU"),
    ("MIT-Modern-Variant", "@rules_license//licenses/spdx:MIT-Modern-Variant"),
    ("MIT-advertising", "@rules_license//licenses/spdx:MIT-advertising"),
    ("MIT-enna", "@rules_license//licenses/spdx:MIT-enna"),
    ("MIT-feh", "@rules_license//licenses/spdx:MIT-feh"),
    ("MIT-open-group", "@rules_license//licenses/spdx:MIT-open-group"),
    ("MITNFA", "@rules_license//licenses/spdx:MITNFA"),
    ("MPL-1.0", "@rules_license//licenses/spdx:MPL-1.0"),
    ("MPL-1.1", "@rules_license//licenses/spdx:MPL-1.1"),
    ("MPL-2.0", "@rules_license//licenses/spdx:MPL-2.0"),
    ("MPL-2.0-no-copyleft-exception", "@rules_license//licenses/spdx:MPL-2.0-no-copyleft-exception"),
    ("MS-PL", "@rules_license//licenses/spdx:MS-PL"),
    ("MS-RL", "@rules_license//licenses/spdx:MS-RL"),
    ("MTLL", "@rules_license//licenses/spdx:MTLL"),
    ("MakeIndex", "@rules_license//licenses/spdx:MakeIndex"),
    ("MirOS", "@rules_license//licenses/spdx:MirOS"),
    ("Motosoto", "@rules_license//licenses/spdx:Motosoto"),
    ("MulanPSL-1.0", "@rules_license//licenses/spdx:MulanPSL-1.0"),
    ("MulanPSL-2.0", "@rules_license//licenses/spdx:MulanPSL-2.0"),
    ("Multics", "@rules_license//licenses/spdx:Multics"),
    ("Mup", "@rules_license//licenses/spdx:Mup"),
    ("NASA-1.3", "@rules_license//licenses/spdx:NASA-1.3"),
    ("NBPL-1.0", "@rules_license//licenses/spdx:NBPL-1.0"),
    ("NCSA", "@rules_license//licenses/spdx:NCSA"),
    ("NGPL", "@rules_license//licenses/spdx:NGPL"),
    ("NLOD-1.0", "@rules_license//licenses/spdx:NLOD-1.0"),
    ("NLPL", "@rules_license//licenses/spdx:NLPL"),
    ("NOSL", "@rules_license//licenses/spdx:NOSL"),
    ("NPL-1.0", "@rules_license//licenses/spdx:NPL-1.0"),
    ("NPL-1.1", "@rules_license//licenses/spdx:NPL-1.1"),
    ("NPOSL-3.0", "@rules_license//licenses/spdx:NPOSL-3.0"),
    ("NRL", "@rules_license//licenses/spdx:NRL"),
    ("NTP", "@rules_license//licenses/spdx:NTP"),
    ("NTP-0", "@rules_license//licenses/spdx:NTP-0"),
    ("Naumen", "@rules_license//licenses/spdx:Naumen"),
    ("Net-SNMP", "@rules_license//licenses/spdx:Net-SNMP"),
    ("NetCDF", "@rules_license//licenses/spdx:NetCDF"),
    ("Newsletr", "@rules_license//licenses/spdx:Newsletr"),
    ("Nokia", "@rules_license//licenses/spdx:Nokia"),
    ("Noweb", "@rules_license//licenses/spdx:Noweb"),
    ("Nunit", "@rules_license//licenses/spdx:Nunit"),
    ("O-UDA-1.0", "@rules_license//licenses/spdx:O-UDA-1.0"),
    ("OCCT-PL", "@rules_license//licenses/spdx:OCCT-PL"),
    ("OCLC-2.0", "@rules_license//licenses/spdx:OCLC-2.0"),
    ("ODC-By-1.0", "@rules_license//licenses/spdx:ODC-By-1.0"),
    ("ODbL-1.0", "@rules_license//licenses/spdx:ODbL-1.0"),
    ("OFL-1.0", "@rules_license//licenses/spdx:OFL-1.0"),
    ("OFL-1.1", "@rules_license//licenses/spdx:OFL-1.1"),
    ("OFL-1.1-RFN", "@rules_license//licenses/spdx:OFL-1.1-RFN"),
    ("OFL-1.1-no-RFN", "@rules_license//licenses/spdx:OFL-1.1-no-RFN"),
    ("OGL-UK-3.0", "@rules_license//licenses/spdx:OGL-UK-3.0"),
    ("OLDAP-2.8", "@rules_license//licenses/spdx:OLDAP-2.8"),
    ("OML", "@rules_license//licenses/spdx:OML"),
    ("OPL-1.0", "@rules_license//licenses/spdx:OPL-1.0"),
    ("OSL-1.0", "@rules_license//licenses/spdx:OSL-1.0"),
    ("OSL-2.0", "@rules_license//licenses/spdx:OSL-2.0"),
    ("OSL-2.1", "@rules_license//licenses/spdx:OSL-2.1"),
    ("OSL-3.0", "@rules_license//licenses/spdx:OSL-3.0"),
    ("OpenSSL", "@rules_license//licenses/spdx:OpenSSL"),
    ("PDDL-1.0", "@rules_license//licenses/spdx:PDDL-1.0"),
    ("PHP-3.0", "@rules_license//licenses/spdx:PHP-3.0"),
    ("PHP-3.01", "@rules_license//licenses/spdx:PHP-3.01"),
    ("PSF-2.0", "@rules_license//licenses/spdx:PSF-2.0"),
    ("Parity-7.0.0", "@rules_license//licenses/spdx:Parity-7.0.0"),
    ("Plexus", "@rules_license//licenses/spdx:Plexus"),
    ("PolyForm-Noncommercial-1.0.0", "@rules_license//licenses/spdx:PolyForm-Noncommercial-1.0.0"),
    ("PostgreSQL", "@rules_license//licenses/spdx:PostgreSQL"),
    ("Python-2.0", "@rules_license//licenses/spdx:Python-2.0"),
    ("QPL-1.0", "@rules_license//licenses/spdx:QPL-1.0"),
    ("Qhull", "@rules_license//licenses/spdx:Qhull"),
    ("RHeCos-1.1", "@rules_license//licenses/spdx:RHeCos-1.1"),
    ("RPL-1.1", "@rules_license//licenses/spdx:RPL-1.1"),
    ("RPL-1.5", "@rules_license//licenses/spdx:RPL-1.5"),
    ("RPSL-1.0", "@rules_license//licenses/spdx:RPSL-1.0"),
    ("RSA-MD", "@rules_license//licenses/spdx:RSA-MD"),
    ("RSCPL", "@rules_license//licenses/spdx:RSCPL"),
    ("Rdisc", "@rules_license//licenses/spdx:Rdisc"),
    ("Ruby", "@rules_license//licenses/spdx:Ruby"),
    ("SAX-PD", "@rules_license//licenses/spdx:SAX-PD"),
    ("SCEA", "@rules_license//licenses/spdx:SCEA"),
    ("SGI-B-2.0", "@rules_license//licenses/spdx:SGI-B-2.0"),
    ("SISSL", "@rules_license//licenses/spdx:SISSL"),
    ("SMLNJ", "@rules_license//licenses/spdx:SMLNJ"),
    ("SMPPL", "@rules_license//licenses/spdx:SMPPL"),
    ("SNIA", "@rules_license//licenses/spdx:SNIA"),
    ("SPL-1.0", "@rules_license//licenses/spdx:SPL-1.0"),
    ("SSPL-1.0", "@rules_license//licenses/spdx:SSPL-1.0"),
    ("SWL", "@rules_license//licenses/spdx:SWL"),
    ("Saxpath", "@rules_license//licenses/spdx:Saxpath"),
    ("Sendmail", "@rules_license//licenses/spdx:Sendmail"),
    ("SimPL-2.0", "@rules_license//licenses/spdx:SimPL-2.0"),
    ("Sleepycat", "@rules_license//licenses/spdx:Sleepycat"),
    ("Spencer-86", "@rules_license//licenses/spdx:Spencer-86"),
    ("Spencer-94", "@rules_license//licenses/spdx:Spencer-94"),
    ("Spencer-99", "@rules_license//licenses/spdx:Spencer-99"),
    ("StandardML-NJ", "@rules_license//licenses/spdx:StandardML-NJ"),
    ("SugarCRM-1.1.3", "@rules_license//licenses/spdx:SugarCRM-1.1.3"),
    ("TCL", "@rules_license//licenses/spdx:TCL"),
    ("TCP-wrappers", "@rules_license//licenses/spdx:TCP-wrappers"),
    ("TMate", "@rules_license//licenses/spdx:TMate"),
    ("TORQUE-1.1", "@rules_license//licenses/spdx:TORQUE-1.1"),
    ("TOSL", "@rules_license//licenses/spdx:TOSL"),
    ("TU-Berlin-1.0", "@rules_license//licenses/spdx:TU-Berlin-1.0"),
    ("TU-Berlin-2.0", "@rules_license//licenses/spdx:TU-Berlin-2.0"),
    ("UCL-1.0", "@rules_license//licenses/spdx:UCL-1.0"),
    ("UPL-1.0", "@rules_license//licenses/spdx:UPL-1.0"),
    ("Unicode-DFS-2015", "@rules_license//licenses/spdx:Unicode-DFS-2015"),
    ("Unicode-DFS-2016", "@rules_license//licenses/spdx:Unicode-DFS-2016"),
    ("Unicode-TOU", "@rules_license//licenses/spdx:Unicode-TOU"),
    ("Unlicense", "@rules_license//licenses/spdx:Unlicense"),
    ("VOSTROM", "@rules_license//licenses/spdx:VOSTROM"),
    ("VSL-1.0", "@rules_license//licenses/spdx:VSL-1.0"),
    ("Vim", "@rules_license//licenses/spdx:Vim"),
    ("W3C", "@rules_license//licenses/spdx:W3C"),
    ("W3C-19980720", "@rules_license//licenses/spdx:W3C-19980720"),
    ("W3C-20150513", "@rules_license//licenses/spdx:W3C-20150513"),
    ("WTFPL", "@rules_license//licenses/spdx:WTFPL"),
    ("Watcom-1.0", "@rules_license//licenses/spdx:Watcom-1.0"),
    ("Wsuipa", "@rules_license//licenses/spdx:Wsuipa"),
    ("X11", "@rules_license//licenses/spdx:X11"),
    ("XFree86-1.1", "@rules_license//licenses/spdx:XFree86-1.1"),
    ("XSkat", "@rules_license//licenses/spdx:XSkat"),
    ("Xerox", "@rules_license//licenses/spdx:Xerox"),
    ("Xnet", "@rules_license//licenses/spdx:Xnet"),
    ("YPL-1.0", "@rules_license//licenses/spdx:YPL-1.0"),
    ("YPL-1.1", "@rules_license//licenses/spdx:YPL-1.1"),
    ("ZPL-1.1", "@rules_license//licenses/spdx:ZPL-1.1"),
    ("ZPL-2.0", "@rules_license//licenses/spdx:ZPL-2.0"),
    ("ZPL-2.1", "@rules_license//licenses/spdx:ZPL-2.1"),
    ("Zed", "@rules_license//licenses/spdx:Zed"),
    ("Zend-2.0", "@rules_license//licenses/spdx:Zend-2.0"),
    ("Zimbra-1.3", "@rules_license//licenses/spdx:Zimbra-1.3"),
    ("Zimbra-1.4", "@rules_license//licenses/spdx:Zimbra-1.4"),
    ("Zlib", "@rules_license//licenses/spdx:Zlib"),
    ("blessing", "@rules_license//licenses/spdx:blessing"),
    ("bzip2-1.0.5", "@rules_license//licenses/spdx:bzip2-1.0.5"),
    ("bzip2-1.0.6", "@rules_license//licenses/spdx:bzip2-1.0.6"),
    ("copyleft-next-0.3.0", "@rules_license//licenses/spdx:copyleft-next-0.3.0"),
    ("copyleft-next-0.3.1", "@rules_license//licenses/spdx:copyleft-next-0.3.1"),
    ("curl", "@rules_license//licenses/spdx:curl"),
    ("diffmark", "@rules_license//licenses/spdx:diffmark"),
    ("dvipdfm", "@rules_license//licenses/spdx:dvipdfm"),
    ("eCos-2.0", "@rules_license//licenses/spdx:eCos-2.0"),
    ("eGenix", "@rules_license//licenses/spdx:eGenix"),
    ("etalab-2.0", "@rules_license//licenses/spdx:etalab-2.0"),
    ("gSOAP-1.3b", "@rules_license//licenses/spdx:gSOAP-1.3b"),
    ("gnuplot", "@rules_license//licenses/spdx:gnuplot"),
    ("iMatix", "@rules_license//licenses/spdx:iMatix"),
    ("libpng-2.0", "@rules_license//licenses/spdx:libpng-2.0"),
    ("libtiff", "@rules_license//licenses/spdx:libtiff"),
    ("mpich2", "@rules_license//licenses/spdx:mpich2"),
    ("psfrag", "@rules_license//licenses/spdx:psfrag"),
    ("psutils", "@rules_license//licenses/spdx:psutils"),
    ("xinetd", "@rules_license//licenses/spdx:xinetd"),
    ("xpp", "@rules_license//licenses/spdx:xpp"),
    ("zlib-acknowledgement", "@rules_license//licenses/spdx:zlib-acknowledgement"),
];
