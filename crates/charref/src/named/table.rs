// @generated by `charref-tablegen` from `data/entities.json`. Do not edit by hand.
//
// cargo run -p charref-tablegen -- crates/charref/data/entities.json > crates/charref/src/named/table.rs

use super::Node;

pub(super) static NODES: [Node; 7729] = [
    Node::branch(1, 52), Node::branch(53, 16), Node::branch(69, 8), Node::branch(77, 14),
    Node::branch(91, 11), Node::branch(102, 16), Node::branch(118, 5), Node::branch(123, 12),
    Node::branch(135, 8), Node::branch(143, 14), Node::branch(157, 5), Node::branch(162, 7),
    Node::branch(169, 11), Node::branch(180, 8), Node::branch(188, 9), Node::branch(197, 14),
    Node::branch(211, 9), Node::branch(220, 4), Node::branch(224, 12), Node::branch(236, 13),
    Node::branch(249, 11), Node::branch(260, 14), Node::branch(274, 9), Node::branch(283, 5),
    Node::branch(288, 4), Node::branch(292, 9), Node::branch(301, 8), Node::branch(309, 16),
    Node::branch(325, 16), Node::branch(341, 15), Node::branch(356, 19), Node::branch(375, 18),
    Node::branch(393, 12), Node::branch(405, 17), Node::branch(422, 10), Node::branch(432, 15),
    Node::branch(447, 6), Node::branch(453, 8), Node::branch(461, 23), Node::branch(484, 14),
    Node::branch(498, 24), Node::branch(522, 18), Node::branch(540, 12), Node::branch(552, 6),
    Node::branch(558, 21), Node::branch(579, 19), Node::branch(598, 13), Node::branch(611, 18),
    Node::branch(629, 15), Node::branch(644, 7), Node::branch(651, 14), Node::branch(665, 8),
    Node::branch(673, 10), Node::branch(683, 1), Node::branch(684, 1), Node::branch(685, 1),
    Node::branch(686, 1), Node::branch(687, 2), Node::branch(689, 1), Node::branch(690, 1),
    Node::branch(691, 1), Node::branch(692, 1), Node::branch(693, 1), Node::branch(694, 2),
    Node::branch(696, 1), Node::branch(697, 1), Node::branch(698, 2), Node::branch(700, 1),
    Node::branch(701, 1), Node::branch(702, 2), Node::branch(704, 1), Node::branch(705, 3),
    Node::branch(708, 1), Node::branch(709, 1), Node::branch(710, 1), Node::branch(711, 1),
    Node::branch(712, 1), Node::branch(713, 1), Node::branch(714, 1), Node::branch(715, 3),
    Node::branch(718, 4), Node::branch(722, 1), Node::branch(723, 2), Node::branch(725, 1),
    Node::branch(726, 1), Node::branch(727, 1), Node::branch(728, 1), Node::branch(729, 4),
    Node::branch(733, 1), Node::branch(734, 1), Node::branch(735, 1), Node::named(736, 1, 0),
    Node::branch(737, 1), Node::branch(738, 1), Node::branch(739, 1), Node::branch(740, 3),
    Node::branch(743, 2), Node::branch(745, 1), Node::branch(746, 1), Node::branch(747, 2),
    Node::branch(749, 4), Node::branch(753, 2), Node::branch(755, 1), Node::branch(756, 1),
    Node::branch(757, 1), Node::branch(758, 3), Node::branch(761, 1), Node::branch(762, 1),
    Node::branch(763, 1), Node::branch(764, 1), Node::branch(765, 2), Node::branch(767, 2),
    Node::branch(769, 1), Node::branch(770, 1), Node::branch(771, 2), Node::branch(773, 1),
    Node::branch(774, 1), Node::branch(775, 2), Node::branch(777, 1), Node::branch(778, 1),
    Node::branch(779, 1), Node::branch(780, 3), Node::branch(783, 1), Node::branch(784, 1),
    Node::legacy(0, 0, 1), Node::branch(785, 1), Node::branch(786, 1), Node::branch(787, 3),
    Node::branch(790, 1), Node::branch(791, 1), Node::named(0, 0, 2), Node::branch(792, 1),
    Node::branch(793, 1), Node::branch(794, 1), Node::named(0, 0, 3), Node::branch(795, 1),
    Node::branch(796, 2), Node::branch(798, 1), Node::branch(799, 1), Node::branch(800, 1),
    Node::branch(801, 2), Node::branch(803, 2), Node::branch(805, 1), Node::branch(806, 1),
    Node::branch(807, 1), Node::branch(808, 1), Node::branch(809, 1), Node::branch(810, 2),
    Node::branch(812, 1), Node::branch(813, 1), Node::branch(814, 1), Node::named(815, 2, 4),
    Node::branch(817, 2), Node::branch(819, 3), Node::branch(822, 1), Node::branch(823, 1),
    Node::branch(824, 2), Node::branch(826, 2), Node::branch(828, 1), Node::branch(829, 1),
    Node::branch(830, 2), Node::branch(832, 1), Node::branch(833, 1), Node::branch(834, 1),
    Node::branch(835, 1), Node::branch(836, 2), Node::branch(838, 1), Node::branch(839, 1),
    Node::branch(840, 1), Node::branch(841, 1), Node::legacy(0, 0, 5), Node::branch(842, 5),
    Node::branch(847, 3), Node::branch(850, 2), Node::branch(852, 1), Node::named(853, 1, 6),
    Node::branch(854, 1), Node::branch(855, 3), Node::branch(858, 3), Node::named(0, 0, 7),
    Node::branch(861, 1), Node::branch(862, 1), Node::branch(863, 2), Node::branch(865, 1),
    Node::branch(866, 1), Node::branch(867, 1), Node::branch(868, 1), Node::named(0, 0, 8),
    Node::branch(869, 1), Node::branch(870, 1), Node::branch(871, 3), Node::branch(874, 3),
    Node::branch(877, 1), Node::branch(878, 4), Node::branch(882, 1), Node::branch(883, 1),
    Node::named(0, 0, 9), Node::branch(884, 1), Node::branch(885, 1), Node::branch(886, 2),
    Node::branch(888, 1), Node::branch(889, 1), Node::branch(890, 1), Node::branch(891, 3),
    Node::branch(894, 1), Node::branch(895, 1), Node::named(0, 0, 10), Node::branch(896, 2),
    Node::branch(898, 1), Node::branch(899, 1), Node::branch(900, 1), Node::branch(901, 1),
    Node::branch(902, 1), Node::branch(903, 1), Node::branch(904, 1), Node::named(0, 0, 11),
    Node::branch(905, 1), Node::branch(906, 2), Node::named(908, 3, 12), Node::branch(911, 2),
    Node::branch(913, 1), Node::branch(914, 1), Node::branch(915, 1), Node::branch(916, 1),
    Node::branch(917, 1), Node::branch(918, 1), Node::branch(919, 3), Node::branch(922, 3),
    Node::named(925, 1, 13), Node::branch(926, 1), Node::branch(927, 1), Node::branch(928, 1),
    Node::branch(929, 2), Node::branch(931, 1), Node::branch(932, 2), Node::branch(934, 1),
    Node::branch(935, 2), Node::branch(937, 1), Node::branch(938, 1), Node::named(939, 4, 14),
    Node::branch(943, 1), Node::branch(944, 1), Node::branch(945, 1), Node::branch(946, 1),
    Node::branch(947, 1), Node::branch(948, 2), Node::branch(950, 1), Node::branch(951, 1),
    Node::branch(952, 4), Node::branch(956, 1), Node::branch(957, 1), Node::branch(958, 2),
    Node::branch(960, 2), Node::branch(962, 3), Node::branch(965, 1), Node::branch(966, 2),
    Node::branch(968, 1), Node::branch(969, 1), Node::branch(970, 1), Node::branch(971, 2),
    Node::branch(973, 2), Node::branch(975, 1), Node::branch(976, 2), Node::branch(978, 1),
    Node::branch(979, 1), Node::branch(980, 1), Node::branch(981, 1), Node::branch(982, 2),
    Node::branch(984, 2), Node::branch(986, 8), Node::branch(994, 1), Node::branch(995, 1),
    Node::branch(996, 1), Node::branch(997, 1), Node::branch(998, 1), Node::branch(999, 1),
    Node::branch(1000, 1), Node::branch(1001, 1), Node::branch(1002, 2), Node::branch(1004, 1),
    Node::branch(1005, 1), Node::branch(1006, 1), Node::branch(1007, 1), Node::branch(1008, 1),
    Node::branch(1009, 1), Node::branch(1010, 1), Node::branch(1011, 1), Node::branch(1012, 1),
    Node::branch(1013, 1), Node::named(0, 0, 15), Node::branch(1014, 1), Node::branch(1015, 1),
    Node::branch(1016, 1), Node::branch(1017, 1), Node::branch(1018, 1), Node::branch(1019, 1),
    Node::branch(1020, 2), Node::branch(1022, 1), Node::branch(1023, 1), Node::branch(1024, 1),
    Node::branch(1025, 1), Node::branch(1026, 1), Node::branch(1027, 1), Node::branch(1028, 2),
    Node::branch(1030, 1), Node::branch(1031, 2), Node::branch(1033, 1), Node::branch(1034, 1),
    Node::branch(1035, 1), Node::branch(1036, 1), Node::branch(1037, 1), Node::named(1038, 5, 16),
    Node::branch(1043, 1), Node::named(1044, 1, 17), Node::branch(1045, 1), Node::branch(1046, 2),
    Node::branch(1048, 2), Node::branch(1050, 2), Node::branch(1052, 2), Node::named(1054, 6, 18),
    Node::branch(1060, 1), Node::branch(1061, 3), Node::branch(1064, 1), Node::branch(1065, 1),
    Node::branch(1066, 2), Node::branch(1068, 1), Node::branch(1069, 2), Node::branch(1071, 1),
    Node::branch(1072, 2), Node::branch(1074, 1), Node::branch(1075, 5), Node::branch(1080, 1),
    Node::branch(1081, 1), Node::branch(1082, 1), Node::branch(1083, 3), Node::branch(1086, 2),
    Node::branch(1088, 4), Node::branch(1092, 1), Node::branch(1093, 2), Node::branch(1095, 4),
    Node::branch(1099, 2), Node::branch(1101, 3), Node::branch(1104, 4), Node::branch(1108, 1),
    Node::branch(1109, 3), Node::branch(1112, 1), Node::branch(1113, 3), Node::branch(1116, 1),
    Node::branch(1117, 1), Node::branch(1118, 4), Node::branch(1122, 2), Node::branch(1124, 2),
    Node::branch(1126, 1), Node::branch(1127, 7), Node::branch(1134, 2), Node::branch(1136, 1),
    Node::branch(1137, 1), Node::branch(1138, 1), Node::branch(1139, 4), Node::branch(1143, 2),
    Node::branch(1145, 2), Node::named(1147, 2, 19), Node::branch(1149, 3), Node::branch(1152, 2),
    Node::branch(1154, 1), Node::branch(1155, 5), Node::branch(1160, 1), Node::branch(1161, 1),
    Node::branch(1162, 5), Node::branch(1167, 2), Node::branch(1169, 3), Node::branch(1172, 2),
    Node::branch(1174, 2), Node::branch(1176, 1), Node::branch(1177, 2), Node::branch(1179, 2),
    Node::branch(1181, 2), Node::branch(1183, 4), Node::branch(1187, 1), Node::named(0, 0, 20),
    Node::branch(1188, 2), Node::named(1190, 2, 21), Node::named(1192, 3, 22),
    Node::branch(1195, 3), Node::branch(1198, 2), Node::branch(1200, 2), Node::branch(1202, 3),
    Node::branch(1205, 4), Node::branch(1209, 2), Node::branch(1211, 3), Node::branch(1214, 2),
    Node::branch(1216, 2), Node::branch(1218, 3), Node::branch(1221, 1), Node::branch(1222, 1),
    Node::branch(1223, 1), Node::branch(1224, 3), Node::branch(1227, 1), Node::branch(1228, 1),
    Node::branch(1229, 3), Node::branch(1232, 1), Node::branch(1233, 2), Node::branch(1235, 1),
    Node::branch(1236, 2), Node::branch(1238, 1), Node::named(1239, 1, 23), Node::branch(1240, 3),
    Node::branch(1243, 1), Node::branch(1244, 2), Node::branch(1246, 1), Node::named(1247, 3, 24),
    Node::branch(1250, 1), Node::named(1251, 1, 3), Node::branch(1252, 1), Node::branch(1253, 1),
    Node::named(1254, 3, 25), Node::branch(1257, 4), Node::branch(1261, 1), Node::branch(1262, 1),
    Node::branch(1263, 2), Node::legacy(1265, 5, 1), Node::branch(1270, 2), Node::branch(1272, 1),
    Node::branch(1273, 4), Node::branch(1277, 1), Node::branch(1278, 1), Node::branch(1279, 3),
    Node::branch(1282, 1), Node::branch(1283, 1), Node::branch(1284, 5), Node::branch(1289, 3),
    Node::branch(1292, 2), Node::branch(1294, 1), Node::named(1295, 2, 26), Node::branch(1297, 2),
    Node::branch(1299, 2), Node::branch(1301, 1), Node::named(1302, 3, 27), Node::branch(1305, 1),
    Node::branch(1306, 3), Node::named(1309, 4, 28), Node::branch(1313, 4), Node::branch(1317, 1),
    Node::branch(1318, 1), Node::branch(1319, 2), Node::named(1321, 1, 29), Node::branch(1322, 2),
    Node::branch(1324, 2), Node::branch(1326, 1), Node::branch(1327, 1), Node::branch(1328, 1),
    Node::branch(1329, 2), Node::branch(1331, 1), Node::branch(1332, 1), Node::branch(1333, 2),
    Node::branch(1335, 1), Node::branch(1336, 1), Node::branch(1337, 1), Node::branch(1338, 1),
    Node::branch(1339, 1), Node::branch(1340, 1), Node::branch(1341, 3), Node::branch(1344, 1),
    Node::named(1345, 1, 30), Node::branch(1346, 1), Node::branch(1347, 9), Node::branch(1356, 3),
    Node::branch(1359, 4), Node::branch(1363, 4), Node::named(1367, 4, 31), Node::branch(1371, 3),
    Node::named(1374, 1, 32), Node::branch(1375, 2), Node::branch(1377, 1), Node::named(1378, 4, 7),
    Node::branch(1382, 2), Node::branch(1384, 4), Node::branch(1388, 8), Node::branch(1396, 1),
    Node::branch(1397, 5), Node::branch(1402, 6), Node::legacy(1408, 7, 5), Node::branch(1415, 1),
    Node::branch(1416, 2), Node::branch(1418, 1), Node::branch(1419, 4), Node::branch(1423, 2),
    Node::branch(1425, 1), Node::branch(1426, 1), Node::branch(1427, 1), Node::branch(1428, 1),
    Node::branch(1429, 3), Node::branch(1432, 2), Node::branch(1434, 1), Node::branch(1435, 2),
    Node::named(0, 0, 33), Node::branch(1437, 2), Node::named(1439, 2, 34), Node::branch(1441, 2),
    Node::branch(1443, 3), Node::branch(1446, 1), Node::branch(1447, 2), Node::branch(1449, 5),
    Node::branch(1454, 2), Node::branch(1456, 5), Node::branch(1461, 1), Node::named(1462, 6, 35),
    Node::branch(1468, 1), Node::branch(1469, 4), Node::branch(1473, 3), Node::named(1476, 2, 36),
    Node::branch(1478, 1), Node::branch(1479, 7), Node::branch(1486, 1), Node::branch(1487, 2),
    Node::branch(1489, 3), Node::branch(1492, 4), Node::branch(1496, 7), Node::branch(1503, 4),
    Node::named(1507, 1, 37), Node::branch(1508, 9), Node::branch(1517, 3), Node::named(0, 0, 38),
    Node::branch(1520, 2), Node::branch(1522, 2), Node::branch(1524, 5), Node::branch(1529, 1),
    Node::branch(1530, 2), Node::branch(1532, 3), Node::branch(1535, 2), Node::branch(1537, 1),
    Node::branch(1538, 4), Node::branch(1542, 3), Node::branch(1545, 1), Node::branch(1546, 3),
    Node::named(1549, 6, 39), Node::branch(1555, 3), Node::branch(1558, 1), Node::branch(1559, 1),
    Node::branch(1560, 1), Node::branch(1561, 1), Node::branch(1562, 1), Node::branch(1563, 1),
    Node::branch(1564, 1), Node::branch(1565, 3), Node::named(1568, 2, 40), Node::branch(1570, 2),
    Node::named(0, 0, 41), Node::branch(1572, 3), Node::named(1575, 9, 42), Node::branch(1584, 2),
    Node::branch(1586, 1), Node::branch(1587, 1), Node::branch(1588, 1), Node::branch(1589, 1),
    Node::branch(1590, 1), Node::branch(1591, 1), Node::branch(1592, 3), Node::branch(1595, 3),
    Node::branch(1598, 1), Node::branch(1599, 1), Node::branch(1600, 7), Node::branch(1607, 3),
    Node::branch(1610, 4), Node::branch(1614, 4), Node::branch(1618, 3), Node::branch(1621, 3),
    Node::branch(1624, 2), Node::branch(1626, 3), Node::branch(1629, 3), Node::branch(1632, 1),
    Node::branch(1633, 1), Node::branch(1634, 4), Node::branch(1638, 2), Node::branch(1640, 1),
    Node::branch(1641, 4), Node::branch(1645, 3), Node::branch(1648, 1), Node::named(0, 0, 43),
    Node::branch(1649, 1), Node::branch(1650, 1), Node::named(1651, 9, 44), Node::branch(1660, 1),
    Node::branch(1661, 7), Node::branch(1668, 1), Node::branch(1669, 4), Node::branch(1673, 2),
    Node::branch(1675, 1), Node::branch(1676, 4), Node::branch(1680, 3), Node::branch(1683, 1),
    Node::branch(1684, 3), Node::branch(1687, 1), Node::branch(1688, 4), Node::branch(1692, 2),
    Node::branch(1694, 5), Node::branch(1699, 3), Node::branch(1702, 1), Node::branch(1703, 2),
    Node::branch(1705, 1), Node::branch(1706, 3), Node::branch(1709, 1), Node::branch(1710, 1),
    Node::branch(1711, 1), Node::branch(1712, 4), Node::branch(1716, 3), Node::branch(1719, 3),
    Node::branch(1722, 1), Node::branch(1723, 3), Node::branch(1726, 3), Node::branch(1729, 2),
    Node::branch(1731, 1), Node::branch(1732, 1), Node::branch(1733, 2), Node::branch(1735, 1),
    Node::branch(1736, 2), Node::branch(1738, 3), Node::branch(1741, 2), Node::branch(1743, 1),
    Node::branch(1744, 2), Node::branch(1746, 2), Node::branch(1748, 2), Node::branch(1750, 2),
    Node::branch(1752, 6), Node::branch(1758, 3), Node::branch(1761, 1), Node::branch(1762, 3),
    Node::branch(1765, 2), Node::branch(1767, 1), Node::branch(1768, 1), Node::branch(1769, 1),
    Node::branch(1770, 1), Node::branch(1771, 2), Node::branch(1773, 1), Node::branch(1774, 1),
    Node::branch(1775, 3), Node::branch(1778, 1), Node::branch(1779, 1), Node::branch(1780, 1),
    Node::branch(1781, 1), Node::branch(1782, 1), Node::branch(1783, 1), Node::branch(1784, 2),
    Node::branch(1786, 1), Node::branch(1787, 1), Node::branch(1788, 2), Node::branch(1790, 1),
    Node::branch(1791, 1), Node::named(0, 0, 45), Node::named(1792, 1, 46), Node::branch(1793, 1),
    Node::branch(1794, 3), Node::branch(1797, 1), Node::branch(1798, 1), Node::branch(1799, 2),
    Node::named(0, 0, 47), Node::branch(1801, 2), Node::branch(1803, 1), Node::branch(1804, 1),
    Node::branch(1805, 3), Node::branch(1808, 2), Node::branch(1810, 2), Node::branch(1812, 2),
    Node::branch(1814, 1), Node::branch(1815, 1), Node::branch(1816, 1), Node::branch(1817, 2),
    Node::branch(1819, 1), Node::branch(1820, 1), Node::branch(1821, 1), Node::branch(1822, 1),
    Node::branch(1823, 1), Node::branch(1824, 2), Node::branch(1826, 1), Node::branch(1827, 2),
    Node::branch(1829, 1), Node::branch(1830, 2), Node::branch(1832, 1), Node::branch(1833, 1),
    Node::branch(1834, 1), Node::branch(1835, 1), Node::branch(1836, 1), Node::branch(1837, 2),
    Node::branch(1839, 1), Node::legacy(0, 0, 48), Node::branch(1840, 1), Node::branch(1841, 1),
    Node::branch(1842, 1), Node::named(0, 0, 49), Node::named(0, 0, 50), Node::branch(1843, 1),
    Node::branch(1844, 1), Node::branch(1845, 1), Node::named(0, 0, 51), Node::branch(1846, 1),
    Node::branch(1847, 1), Node::branch(1848, 1), Node::branch(1849, 1), Node::branch(1850, 1),
    Node::branch(1851, 1), Node::branch(1852, 1), Node::branch(1853, 1), Node::branch(1854, 1),
    Node::branch(1855, 2), Node::named(0, 0, 52), Node::branch(1857, 1), Node::branch(1858, 1),
    Node::branch(1859, 1), Node::named(0, 0, 53), Node::branch(1860, 1), Node::branch(1861, 1),
    Node::branch(1862, 1), Node::branch(1863, 1), Node::branch(1864, 1), Node::branch(1865, 1),
    Node::branch(1866, 1), Node::named(1867, 1, 54), Node::branch(1868, 1), Node::branch(1869, 1),
    Node::branch(1870, 1), Node::branch(1871, 1), Node::branch(1872, 1), Node::branch(1873, 1),
    Node::branch(1874, 1), Node::branch(1875, 1), Node::named(0, 0, 55), Node::named(0, 0, 56),
    Node::branch(1876, 1), Node::branch(1877, 2), Node::branch(1879, 1), Node::branch(1880, 3),
    Node::branch(1883, 2), Node::branch(1885, 1), Node::branch(1886, 1), Node::branch(1887, 1),
    Node::named(1888, 1, 57), Node::branch(1889, 1), Node::branch(1890, 1), Node::branch(1891, 1),
    Node::branch(1892, 1), Node::branch(1893, 1), Node::branch(1894, 1), Node::branch(1895, 1),
    Node::branch(1896, 1), Node::named(0, 0, 58), Node::named(1897, 1, 59), Node::named(0, 0, 60),
    Node::branch(1898, 2), Node::branch(1900, 1), Node::branch(1901, 1), Node::named(1902, 2, 61),
    Node::branch(1904, 1), Node::branch(1905, 1), Node::branch(1906, 1), Node::branch(1907, 1),
    Node::named(0, 0, 62), Node::legacy(0, 0, 63), Node::branch(1908, 1), Node::branch(1909, 1),
    Node::branch(1910, 1), Node::named(0, 0, 64), Node::branch(1911, 1), Node::named(0, 0, 65),
    Node::branch(1912, 1), Node::branch(1913, 1), Node::branch(1914, 1), Node::branch(1915, 1),
    Node::branch(1916, 1), Node::branch(1917, 1), Node::branch(1918, 1), Node::branch(1919, 2),
    Node::branch(1921, 1), Node::branch(1922, 1), Node::named(0, 0, 66), Node::branch(1923, 1),
    Node::branch(1924, 1), Node::branch(1925, 1), Node::named(0, 0, 67), Node::named(0, 0, 68),
    Node::branch(1926, 1), Node::branch(1927, 1), Node::branch(1928, 1), Node::branch(1929, 1),
    Node::branch(1930, 1), Node::branch(1931, 1), Node::branch(1932, 1), Node::branch(1933, 1),
    Node::branch(1934, 1), Node::branch(1935, 1), Node::named(0, 0, 69), Node::branch(1936, 1),
    Node::named(0, 0, 70), Node::branch(1937, 1), Node::branch(1938, 1), Node::branch(1939, 1),
    Node::branch(1940, 1), Node::branch(1941, 1), Node::named(0, 0, 71), Node::branch(1942, 1),
    Node::named(0, 0, 72), Node::branch(1943, 1), Node::branch(1944, 1), Node::branch(1945, 1),
    Node::branch(1946, 1), Node::branch(1947, 1), Node::branch(1948, 1), Node::branch(1949, 1),
    Node::branch(1950, 1), Node::branch(1951, 1), Node::branch(1952, 1), Node::branch(1953, 1),
    Node::named(0, 0, 73), Node::branch(1954, 1), Node::named(0, 0, 4), Node::branch(1955, 1),
    Node::branch(1956, 2), Node::branch(1958, 1), Node::named(1959, 1, 74), Node::branch(1960, 1),
    Node::branch(1961, 1), Node::branch(1962, 1), Node::branch(1963, 1), Node::branch(1964, 1),
    Node::branch(1965, 1), Node::branch(1966, 1), Node::branch(1967, 1), Node::branch(1968, 1),
    Node::named(0, 0, 75), Node::named(0, 0, 76), Node::branch(1969, 1), Node::branch(1970, 1),
    Node::branch(1971, 1), Node::branch(1972, 1), Node::branch(1973, 1), Node::branch(1974, 1),
    Node::branch(1975, 1), Node::branch(1976, 1), Node::named(0, 0, 77), Node::named(0, 0, 78),
    Node::branch(1977, 1), Node::branch(1978, 1), Node::branch(1979, 1), Node::branch(1980, 1),
    Node::branch(1981, 1), Node::branch(1982, 1), Node::branch(1983, 1), Node::branch(1984, 1),
    Node::branch(1985, 1), Node::branch(1986, 1), Node::named(0, 0, 79), Node::branch(1987, 1),
    Node::branch(1988, 1), Node::named(0, 0, 80), Node::branch(1989, 1), Node::branch(1990, 1),
    Node::branch(1991, 1), Node::branch(1992, 1), Node::branch(1993, 1), Node::branch(1994, 1),
    Node::named(0, 0, 81), Node::branch(1995, 1), Node::named(0, 0, 82), Node::named(0, 0, 83),
    Node::branch(1996, 1), Node::branch(1997, 1), Node::named(0, 0, 84), Node::branch(1998, 1),
    Node::branch(1999, 1), Node::branch(2000, 1), Node::branch(2001, 1), Node::branch(2002, 1),
    Node::branch(2003, 1), Node::branch(2004, 1), Node::named(0, 0, 85), Node::branch(2005, 1),
    Node::branch(2006, 1), Node::branch(2007, 1), Node::named(0, 0, 86), Node::branch(2008, 1),
    Node::branch(2009, 1), Node::branch(2010, 1), Node::named(2011, 12, 87), Node::branch(2023, 1),
    Node::branch(2024, 1), Node::branch(2025, 1), Node::branch(2026, 1), Node::branch(2027, 1),
    Node::named(0, 0, 88), Node::branch(2028, 1), Node::named(0, 0, 89), Node::branch(2029, 1),
    Node::branch(2030, 1), Node::branch(2031, 1), Node::branch(2032, 1), Node::branch(2033, 1),
    Node::branch(2034, 1), Node::branch(2035, 1), Node::branch(2036, 1), Node::branch(2037, 2),
    Node::branch(2039, 1), Node::branch(2040, 1), Node::branch(2041, 1), Node::named(0, 0, 90),
    Node::named(0, 0, 91), Node::named(0, 0, 92), Node::branch(2042, 1), Node::branch(2043, 1),
    Node::branch(2044, 1), Node::branch(2045, 1), Node::branch(2046, 1), Node::branch(2047, 2),
    Node::branch(2049, 1), Node::named(0, 0, 93), Node::branch(2050, 1), Node::named(0, 0, 94),
    Node::branch(2051, 1), Node::branch(2052, 1), Node::branch(2053, 1), Node::legacy(0, 0, 95),
    Node::branch(2054, 1), Node::branch(2055, 1), Node::branch(2056, 1), Node::branch(2057, 1),
    Node::branch(2058, 1), Node::named(0, 0, 96), Node::branch(2059, 1), Node::named(0, 0, 13),
    Node::named(0, 0, 97), Node::branch(2060, 1), Node::branch(2061, 1), Node::branch(2062, 1),
    Node::branch(2063, 1), Node::branch(2064, 1), Node::named(0, 0, 98), Node::branch(2065, 1),
    Node::branch(2066, 1), Node::branch(2067, 1), Node::branch(2068, 1), Node::branch(2069, 1),
    Node::branch(2070, 1), Node::branch(2071, 1), Node::branch(2072, 1), Node::named(0, 0, 99),
    Node::named(0, 0, 100), Node::branch(2073, 1), Node::branch(2074, 1), Node::branch(2075, 1),
    Node::branch(2076, 1), Node::branch(2077, 1), Node::branch(2078, 1), Node::branch(2079, 1),
    Node::branch(2080, 1), Node::named(2081, 1, 101), Node::branch(2082, 2), Node::named(0, 0, 102),
    Node::named(2084, 2, 103), Node::branch(2086, 1), Node::branch(2087, 1), Node::branch(2088, 1),
    Node::branch(2089, 1), Node::named(0, 0, 104), Node::named(0, 0, 105), Node::branch(2090, 1),
    Node::branch(2091, 1), Node::named(0, 0, 106), Node::named(0, 0, 107), Node::branch(2092, 2),
    Node::branch(2094, 2), Node::branch(2096, 1), Node::branch(2097, 1), Node::branch(2098, 1),
    Node::branch(2099, 1), Node::branch(2100, 1), Node::branch(2101, 1), Node::branch(2102, 1),
    Node::branch(2103, 2), Node::branch(2105, 1), Node::named(0, 0, 108), Node::branch(2106, 1),
    Node::named(0, 0, 109), Node::branch(2107, 1), Node::branch(2108, 1), Node::branch(2109, 1),
    Node::branch(2110, 1), Node::branch(2111, 1), Node::branch(2112, 1), Node::branch(2113, 1),
    Node::branch(2114, 1), Node::branch(2115, 1), Node::branch(2116, 1), Node::branch(2117, 1),
    Node::branch(2118, 1), Node::branch(2119, 1), Node::branch(2120, 1), Node::branch(2121, 1),
    Node::branch(2122, 1), Node::branch(2123, 1), Node::branch(2124, 1), Node::branch(2125, 1),
    Node::branch(2126, 1), Node::named(0, 0, 110), Node::branch(2127, 1), Node::named(0, 0, 111),
    Node::branch(2128, 3), Node::named(0, 0, 112), Node::branch(2131, 1), Node::branch(2132, 1),
    Node::branch(2133, 1), Node::branch(2134, 1), Node::branch(2135, 1), Node::named(0, 0, 113),
    Node::branch(2136, 1), Node::branch(2137, 1), Node::named(0, 0, 114), Node::branch(2138, 1),
    Node::branch(2139, 1), Node::branch(2140, 1), Node::branch(2141, 1), Node::branch(2142, 1),
    Node::branch(2143, 1), Node::branch(2144, 1), Node::named(0, 0, 115), Node::named(0, 0, 116),
    Node::branch(2145, 1), Node::branch(2146, 1), Node::branch(2147, 1), Node::branch(2148, 1),
    Node::branch(2149, 1), Node::branch(2150, 1), Node::named(0, 0, 117), Node::branch(2151, 1),
    Node::branch(2152, 1), Node::branch(2153, 1), Node::named(0, 0, 118), Node::branch(2154, 1),
    Node::branch(2155, 1), Node::branch(2156, 1), Node::branch(2157, 1), Node::named(0, 0, 119),
    Node::named(0, 0, 120), Node::branch(2158, 1), Node::branch(2159, 1), Node::named(0, 0, 121),
    Node::branch(2160, 1), Node::named(0, 0, 122), Node::branch(2161, 1), Node::branch(2162, 2),
    Node::branch(2164, 1), Node::branch(2165, 2), Node::legacy(0, 0, 48), Node::named(2167, 4, 123),
    Node::named(2171, 6, 124), Node::branch(2177, 1), Node::branch(2178, 1), Node::named(0, 0, 125),
    Node::branch(2179, 1), Node::named(0, 0, 126), Node::branch(2180, 1), Node::branch(2181, 1),
    Node::branch(2182, 1), Node::branch(2183, 1), Node::branch(2184, 1), Node::named(0, 0, 127),
    Node::branch(2185, 1), Node::branch(2186, 1), Node::branch(2187, 1), Node::branch(2188, 1),
    Node::branch(2189, 1), Node::branch(2190, 1), Node::branch(2191, 1), Node::branch(2192, 2),
    Node::branch(2194, 1), Node::branch(2195, 1), Node::named(0, 0, 128), Node::branch(2196, 1),
    Node::branch(2197, 1), Node::branch(2198, 1), Node::branch(2199, 1), Node::branch(2200, 1),
    Node::branch(2201, 3), Node::named(0, 0, 129), Node::branch(2204, 7), Node::branch(2211, 1),
    Node::branch(2212, 2), Node::branch(2214, 2), Node::branch(2216, 1), Node::named(2217, 1, 130),
    Node::branch(2218, 1), Node::branch(2219, 1), Node::named(2220, 1, 131), Node::branch(2221, 1),
    Node::branch(2222, 12), Node::branch(2234, 1), Node::branch(2235, 1), Node::branch(2236, 1),
    Node::branch(2237, 1), Node::branch(2238, 1), Node::branch(2239, 1), Node::branch(2240, 1),
    Node::branch(2241, 1), Node::branch(2242, 1), Node::branch(2243, 1), Node::named(2244, 5, 132),
    Node::branch(2249, 2), Node::branch(2251, 2), Node::branch(2253, 1), Node::branch(2254, 1),
    Node::branch(2255, 1), Node::branch(2256, 1), Node::branch(2257, 1), Node::branch(2258, 1),
    Node::branch(2259, 1), Node::named(0, 0, 133), Node::branch(2260, 1), Node::branch(2261, 1),
    Node::named(0, 0, 134), Node::named(2262, 6, 135), Node::branch(2268, 1), Node::branch(2269, 1),
    Node::branch(2270, 2), Node::branch(2272, 2), Node::branch(2274, 3), Node::branch(2277, 1),
    Node::branch(2278, 1), Node::branch(2279, 1), Node::branch(2280, 2), Node::branch(2282, 1),
    Node::branch(2283, 1), Node::branch(2284, 2), Node::branch(2286, 1), Node::named(2287, 5, 136),
    Node::branch(2292, 4), Node::branch(2296, 1), Node::branch(2297, 1), Node::branch(2298, 1),
    Node::branch(2299, 1), Node::branch(2300, 1), Node::branch(2301, 1), Node::branch(2302, 1),
    Node::branch(2303, 1), Node::branch(2304, 1), Node::branch(2305, 1), Node::branch(2306, 1),
    Node::branch(2307, 1), Node::branch(2308, 1), Node::branch(2309, 1), Node::named(0, 0, 137),
    Node::branch(2310, 2), Node::branch(2312, 1), Node::legacy(0, 0, 138), Node::branch(2313, 1),
    Node::branch(2314, 1), Node::branch(2315, 1), Node::named(0, 0, 139), Node::branch(2316, 1),
    Node::branch(2317, 1), Node::named(0, 0, 61), Node::branch(2318, 1), Node::branch(2319, 1),
    Node::named(2320, 2, 140), Node::branch(2322, 1), Node::branch(2323, 2), Node::branch(2325, 1),
    Node::branch(2326, 1), Node::named(2327, 4, 141), Node::branch(2331, 1), Node::branch(2332, 1),
    Node::branch(2333, 1), Node::branch(2334, 2), Node::branch(2336, 2), Node::branch(2338, 1),
    Node::branch(2339, 1), Node::branch(2340, 1), Node::branch(2341, 1), Node::branch(2342, 1),
    Node::branch(2343, 1), Node::branch(2344, 1), Node::branch(2345, 1), Node::branch(2346, 1),
    Node::branch(2347, 1), Node::branch(2348, 1), Node::branch(2349, 1), Node::branch(2350, 1),
    Node::branch(2351, 1), Node::branch(2352, 1), Node::branch(2353, 1), Node::named(0, 0, 142),
    Node::branch(2354, 1), Node::branch(2355, 1), Node::named(0, 0, 143), Node::branch(2356, 1),
    Node::named(2357, 1, 144), Node::branch(2358, 1), Node::named(0, 0, 145),
    Node::named(2359, 1, 146), Node::branch(2360, 1), Node::branch(2361, 1), Node::branch(2362, 1),
    Node::named(0, 0, 147), Node::branch(2363, 1), Node::branch(2364, 1), Node::branch(2365, 1),
    Node::branch(2366, 1), Node::branch(2367, 1), Node::branch(2368, 1), Node::branch(2369, 2),
    Node::branch(2371, 2), Node::branch(2373, 3), Node::branch(2376, 1), Node::branch(2377, 1),
    Node::branch(2378, 1), Node::branch(2379, 1), Node::branch(2380, 1), Node::branch(2381, 1),
    Node::named(0, 0, 148), Node::legacy(0, 0, 149), Node::branch(2382, 1), Node::branch(2383, 1),
    Node::branch(2384, 1), Node::branch(2385, 1), Node::branch(2386, 2), Node::branch(2388, 1),
    Node::named(0, 0, 150), Node::branch(2389, 1), Node::branch(2390, 1), Node::branch(2391, 2),
    Node::named(0, 0, 151), Node::branch(2393, 1), Node::branch(2394, 1), Node::branch(2395, 1),
    Node::branch(2396, 1), Node::branch(2397, 1), Node::branch(2398, 1), Node::branch(2399, 1),
    Node::branch(2400, 2), Node::branch(2402, 1), Node::branch(2403, 2), Node::branch(2405, 1),
    Node::branch(2406, 1), Node::named(0, 0, 152), Node::branch(2407, 1), Node::branch(2408, 1),
    Node::named(0, 0, 153), Node::branch(2409, 1), Node::branch(2410, 1), Node::named(0, 0, 154),
    Node::branch(2411, 1), Node::named(0, 0, 155), Node::named(2412, 2, 24),
    Node::named(2414, 3, 156), Node::named(0, 0, 157), Node::named(0, 0, 2), Node::branch(2417, 1),
    Node::branch(2418, 1), Node::named(0, 0, 158), Node::named(0, 0, 159), Node::named(0, 0, 160),
    Node::named(0, 0, 161), Node::branch(2419, 1), Node::named(2420, 1, 162), Node::branch(2421, 1),
    Node::branch(2422, 1), Node::branch(2423, 1), Node::branch(2424, 1), Node::branch(2425, 1),
    Node::branch(2426, 2), Node::branch(2428, 1), Node::branch(2429, 1), Node::branch(2430, 1),
    Node::branch(2431, 5), Node::branch(2436, 1), Node::branch(2437, 1), Node::branch(2438, 1),
    Node::branch(2439, 1), Node::branch(2440, 1), Node::branch(2441, 1), Node::branch(2442, 2),
    Node::branch(2444, 1), Node::branch(2445, 1), Node::branch(2446, 1), Node::branch(2447, 1),
    Node::branch(2448, 1), Node::named(0, 0, 163), Node::branch(2449, 2), Node::branch(2451, 1),
    Node::branch(2452, 1), Node::branch(2453, 1), Node::branch(2454, 1), Node::branch(2455, 1),
    Node::branch(2456, 1), Node::branch(2457, 1), Node::branch(2458, 1), Node::branch(2459, 1),
    Node::branch(2460, 1), Node::branch(2461, 1), Node::branch(2462, 1), Node::named(0, 0, 164),
    Node::branch(2463, 1), Node::branch(2464, 1), Node::named(0, 0, 165), Node::named(0, 0, 166),
    Node::branch(2465, 1), Node::branch(2466, 2), Node::branch(2468, 1), Node::branch(2469, 1),
    Node::branch(2470, 1), Node::branch(2471, 3), Node::branch(2474, 1), Node::branch(2475, 1),
    Node::branch(2476, 1), Node::branch(2477, 1), Node::branch(2478, 1), Node::named(2479, 4, 167),
    Node::branch(2483, 1), Node::branch(2484, 1), Node::branch(2485, 1), Node::branch(2486, 1),
    Node::branch(2487, 1), Node::branch(2488, 1), Node::branch(2489, 1), Node::branch(2490, 1),
    Node::branch(2491, 1), Node::branch(2492, 1), Node::branch(2493, 1), Node::branch(2494, 1),
    Node::named(0, 0, 168), Node::named(0, 0, 169), Node::branch(2495, 1), Node::branch(2496, 1),
    Node::branch(2497, 1), Node::branch(2498, 1), Node::branch(2499, 1), Node::branch(2500, 1),
    Node::branch(2501, 1), Node::named(0, 0, 170), Node::named(0, 0, 171), Node::branch(2502, 1),
    Node::branch(2503, 1), Node::branch(2504, 1), Node::branch(2505, 1), Node::branch(2506, 1),
    Node::branch(2507, 1), Node::branch(2508, 1), Node::branch(2509, 1), Node::branch(2510, 1),
    Node::named(0, 0, 172), Node::branch(2511, 1), Node::branch(2512, 1), Node::branch(2513, 1),
    Node::branch(2514, 1), Node::branch(2515, 1), Node::branch(2516, 1), Node::named(0, 0, 173),
    Node::branch(2517, 1), Node::branch(2518, 1), Node::named(2519, 2, 174), Node::branch(2521, 1),
    Node::branch(2522, 1), Node::branch(2523, 2), Node::branch(2525, 1), Node::branch(2526, 2),
    Node::branch(2528, 1), Node::named(0, 0, 175), Node::branch(2529, 1), Node::branch(2530, 1),
    Node::branch(2531, 2), Node::branch(2533, 1), Node::branch(2534, 1), Node::named(0, 0, 176),
    Node::named(2535, 2, 31), Node::named(2537, 4, 177), Node::branch(2541, 1),
    Node::branch(2542, 1), Node::named(0, 0, 178), Node::named(0, 0, 179), Node::branch(2543, 1),
    Node::branch(2544, 1), Node::branch(2545, 1), Node::branch(2546, 1), Node::branch(2547, 1),
    Node::branch(2548, 1), Node::branch(2549, 1), Node::branch(2550, 1), Node::branch(2551, 1),
    Node::named(0, 0, 180), Node::branch(2552, 1), Node::named(2553, 1, 181), Node::branch(2554, 1),
    Node::branch(2555, 2), Node::branch(2557, 1), Node::branch(2558, 1), Node::branch(2559, 1),
    Node::branch(2560, 3), Node::branch(2563, 1), Node::branch(2564, 2), Node::named(2566, 2, 182),
    Node::branch(2568, 1), Node::branch(2569, 1), Node::branch(2570, 1), Node::branch(2571, 1),
    Node::named(0, 0, 183), Node::branch(2572, 1), Node::branch(2573, 1), Node::branch(2574, 1),
    Node::named(0, 0, 81), Node::branch(2575, 1), Node::branch(2576, 2), Node::branch(2578, 1),
    Node::branch(2579, 2), Node::branch(2581, 1), Node::branch(2582, 1), Node::branch(2583, 1),
    Node::branch(2584, 1), Node::branch(2585, 1), Node::branch(2586, 2), Node::branch(2588, 2),
    Node::branch(2590, 1), Node::branch(2591, 1), Node::branch(2592, 1), Node::branch(2593, 1),
    Node::branch(2594, 2), Node::named(2596, 1, 184), Node::branch(2597, 1), Node::branch(2598, 1),
    Node::named(0, 0, 185), Node::branch(2599, 1), Node::branch(2600, 1), Node::named(0, 0, 186),
    Node::named(0, 0, 187), Node::branch(2601, 1), Node::named(2602, 3, 188), Node::branch(2605, 1),
    Node::branch(2606, 1), Node::branch(2607, 1), Node::branch(2608, 1), Node::branch(2609, 1),
    Node::branch(2610, 1), Node::branch(2611, 1), Node::branch(2612, 1), Node::branch(2613, 1),
    Node::branch(2614, 1), Node::named(0, 0, 189), Node::named(2615, 1, 190), Node::branch(2616, 1),
    Node::named(0, 0, 191), Node::named(2617, 1, 192), Node::branch(2618, 1), Node::branch(2619, 1),
    Node::branch(2620, 1), Node::branch(2621, 1), Node::branch(2622, 1), Node::branch(2623, 1),
    Node::named(2624, 4, 193), Node::branch(2628, 1), Node::branch(2629, 1), Node::branch(2630, 1),
    Node::branch(2631, 2), Node::branch(2633, 1), Node::branch(2634, 1), Node::branch(2635, 1),
    Node::named(0, 0, 194), Node::branch(2636, 1), Node::branch(2637, 1), Node::branch(2638, 1),
    Node::branch(2639, 1), Node::branch(2640, 1), Node::branch(2641, 2), Node::branch(2643, 1),
    Node::named(0, 0, 195), Node::named(0, 0, 196), Node::named(2644, 2, 197),
    Node::branch(2646, 1), Node::named(2647, 1, 198), Node::branch(2648, 1), Node::branch(2649, 1),
    Node::branch(2650, 1), Node::named(2651, 1, 199), Node::named(0, 0, 36), Node::branch(2652, 1),
    Node::branch(2653, 1), Node::named(0, 0, 200), Node::branch(2654, 1), Node::branch(2655, 1),
    Node::named(2656, 3, 201), Node::branch(2659, 1), Node::named(2660, 1, 202),
    Node::branch(2661, 1), Node::branch(2662, 1), Node::legacy(2663, 2, 203), Node::branch(2665, 1),
    Node::branch(2666, 1), Node::named(2667, 2, 204), Node::branch(2669, 1), Node::branch(2670, 1),
    Node::branch(2671, 1), Node::branch(2672, 1), Node::named(2673, 3, 205), Node::branch(2676, 1),
    Node::branch(2677, 1), Node::branch(2678, 1), Node::branch(2679, 1), Node::branch(2680, 1),
    Node::branch(2681, 3), Node::branch(2684, 1), Node::branch(2685, 1), Node::branch(2686, 1),
    Node::branch(2687, 1), Node::named(2688, 2, 206), Node::branch(2690, 1), Node::branch(2691, 1),
    Node::branch(2692, 1), Node::branch(2693, 1), Node::branch(2694, 2), Node::branch(2696, 1),
    Node::branch(2697, 3), Node::branch(2700, 2), Node::branch(2702, 1), Node::branch(2703, 1),
    Node::branch(2704, 1), Node::branch(2705, 1), Node::branch(2706, 1), Node::branch(2707, 1),
    Node::branch(2708, 1), Node::named(0, 0, 207), Node::branch(2709, 1), Node::branch(2710, 1),
    Node::branch(2711, 1), Node::branch(2712, 1), Node::branch(2713, 1), Node::branch(2714, 1),
    Node::branch(2715, 1), Node::named(0, 0, 208), Node::branch(2716, 1), Node::branch(2717, 1),
    Node::named(0, 0, 209), Node::branch(2718, 1), Node::named(0, 0, 210), Node::branch(2719, 1),
    Node::branch(2720, 1), Node::branch(2721, 2), Node::branch(2723, 1), Node::named(0, 0, 211),
    Node::branch(2724, 1), Node::branch(2725, 1), Node::branch(2726, 3), Node::branch(2729, 1),
    Node::branch(2730, 1), Node::branch(2731, 1), Node::branch(2732, 1), Node::branch(2733, 1),
    Node::named(2734, 3, 212), Node::branch(2737, 1), Node::branch(2738, 1), Node::branch(2739, 1),
    Node::named(0, 0, 213), Node::branch(2740, 1), Node::branch(2741, 1), Node::branch(2742, 1),
    Node::branch(2743, 2), Node::branch(2745, 1), Node::branch(2746, 1), Node::named(2747, 3, 214),
    Node::named(0, 0, 215), Node::branch(2750, 5), Node::named(0, 0, 216),
    Node::named(2755, 1, 217), Node::branch(2756, 1), Node::branch(2757, 1), Node::branch(2758, 1),
    Node::named(0, 0, 218), Node::branch(2759, 1), Node::branch(2760, 1), Node::branch(2761, 1),
    Node::branch(2762, 1), Node::branch(2763, 1), Node::named(0, 0, 219), Node::branch(2764, 1),
    Node::branch(2765, 1), Node::named(2766, 1, 220), Node::branch(2767, 1), Node::branch(2768, 3),
    Node::branch(2771, 3), Node::branch(2774, 1), Node::branch(2775, 1), Node::branch(2776, 1),
    Node::named(0, 0, 221), Node::branch(2777, 1), Node::named(0, 0, 222), Node::branch(2778, 1),
    Node::branch(2779, 1), Node::branch(2780, 1), Node::branch(2781, 1), Node::branch(2782, 1),
    Node::branch(2783, 1), Node::branch(2784, 1), Node::branch(2785, 1), Node::branch(2786, 1),
    Node::branch(2787, 1), Node::branch(2788, 1), Node::branch(2789, 1), Node::branch(2790, 2),
    Node::branch(2792, 1), Node::branch(2793, 1), Node::branch(2794, 1), Node::branch(2795, 1),
    Node::branch(2796, 1), Node::branch(2797, 2), Node::branch(2799, 1), Node::branch(2800, 1),
    Node::branch(2801, 2), Node::branch(2803, 1), Node::branch(2804, 2), Node::branch(2806, 1),
    Node::named(0, 0, 223), Node::branch(2807, 1), Node::branch(2808, 1), Node::branch(2809, 1),
    Node::branch(2810, 1), Node::branch(2811, 1), Node::branch(2812, 1), Node::legacy(0, 0, 95),
    Node::branch(2813, 1), Node::branch(2814, 1), Node::named(0, 0, 224), Node::branch(2815, 1),
    Node::named(2816, 1, 225), Node::branch(2817, 1), Node::branch(2818, 1), Node::branch(2819, 1),
    Node::branch(2820, 1), Node::branch(2821, 1), Node::named(0, 0, 226), Node::branch(2822, 1),
    Node::branch(2823, 1), Node::branch(2824, 2), Node::branch(2826, 1), Node::branch(2827, 3),
    Node::branch(2830, 1), Node::branch(2831, 1), Node::branch(2832, 1), Node::branch(2833, 1),
    Node::branch(2834, 1), Node::branch(2835, 1), Node::named(0, 0, 98), Node::branch(2836, 2),
    Node::branch(2838, 1), Node::branch(2839, 1), Node::branch(2840, 1), Node::branch(2841, 1),
    Node::branch(2842, 1), Node::branch(2843, 1), Node::named(0, 0, 227), Node::branch(2844, 2),
    Node::branch(2846, 1), Node::named(2847, 1, 228), Node::branch(2848, 1), Node::branch(2849, 3),
    Node::branch(2852, 1), Node::branch(2853, 1), Node::named(0, 0, 229), Node::branch(2854, 1),
    Node::branch(2855, 1), Node::branch(2856, 1), Node::branch(2857, 1), Node::branch(2858, 1),
    Node::branch(2859, 1), Node::branch(2860, 1), Node::branch(2861, 1), Node::named(2862, 1, 230),
    Node::branch(2863, 1), Node::branch(2864, 2), Node::branch(2866, 1), Node::legacy(0, 0, 231),
    Node::branch(2867, 1), Node::named(2868, 7, 232), Node::branch(2875, 1), Node::branch(2876, 2),
    Node::branch(2878, 1), Node::branch(2879, 2), Node::named(2881, 1, 233), Node::branch(2882, 1),
    Node::named(2883, 1, 234), Node::branch(2884, 1), Node::branch(2885, 2), Node::branch(2887, 2),
    Node::branch(2889, 1), Node::named(2890, 2, 235), Node::branch(2892, 1), Node::branch(2893, 1),
    Node::branch(2894, 1), Node::branch(2895, 1), Node::branch(2896, 1), Node::branch(2897, 1),
    Node::branch(2898, 2), Node::named(2900, 8, 236), Node::branch(2908, 1), Node::named(0, 0, 102),
    Node::branch(2909, 1), Node::named(2910, 12, 237), Node::branch(2922, 1), Node::branch(2923, 1),
    Node::branch(2924, 1), Node::branch(2925, 1), Node::branch(2926, 1), Node::named(0, 0, 238),
    Node::branch(2927, 1), Node::branch(2928, 1), Node::branch(2929, 1), Node::named(0, 0, 239),
    Node::branch(2930, 1), Node::branch(2931, 1), Node::named(0, 0, 240), Node::branch(2932, 2),
    Node::branch(2934, 2), Node::branch(2936, 2), Node::branch(2938, 1), Node::branch(2939, 1),
    Node::branch(2940, 1), Node::branch(2941, 1), Node::branch(2942, 1), Node::named(2943, 3, 241),
    Node::branch(2946, 1), Node::branch(2947, 1), Node::branch(2948, 1), Node::branch(2949, 7),
    Node::branch(2956, 1), Node::branch(2957, 2), Node::branch(2959, 1), Node::branch(2960, 1),
    Node::branch(2961, 1), Node::branch(2962, 1), Node::branch(2963, 1), Node::branch(2964, 1),
    Node::branch(2965, 1), Node::branch(2966, 1), Node::branch(2967, 2), Node::branch(2969, 1),
    Node::named(0, 0, 242), Node::branch(2970, 1), Node::branch(2971, 1), Node::branch(2972, 1),
    Node::branch(2973, 1), Node::named(0, 0, 243), Node::branch(2974, 1), Node::branch(2975, 1),
    Node::branch(2976, 1), Node::branch(2977, 2), Node::branch(2979, 1), Node::branch(2980, 1),
    Node::legacy(0, 0, 61), Node::branch(2981, 1), Node::branch(2982, 1), Node::branch(2983, 1),
    Node::branch(2984, 1), Node::branch(2985, 1), Node::branch(2986, 1), Node::branch(2987, 1),
    Node::branch(2988, 1), Node::branch(2989, 2), Node::branch(2991, 1), Node::branch(2992, 1),
    Node::branch(2993, 1), Node::branch(2994, 1), Node::branch(2995, 1), Node::branch(2996, 1),
    Node::branch(2997, 1), Node::branch(2998, 1), Node::branch(2999, 1), Node::branch(3000, 1),
    Node::branch(3001, 1), Node::branch(3002, 1), Node::branch(3003, 1), Node::branch(3004, 7),
    Node::named(0, 0, 244), Node::branch(3011, 1), Node::named(3012, 2, 39), Node::branch(3014, 1),
    Node::branch(3015, 2), Node::named(0, 0, 245), Node::branch(3017, 1), Node::branch(3018, 1),
    Node::branch(3019, 1), Node::branch(3020, 1), Node::branch(3021, 1), Node::branch(3022, 1),
    Node::branch(3023, 2), Node::branch(3025, 1), Node::branch(3026, 1), Node::branch(3027, 2),
    Node::branch(3029, 1), Node::named(0, 0, 246), Node::branch(3030, 1), Node::branch(3031, 1),
    Node::branch(3032, 1), Node::branch(3033, 1), Node::branch(3034, 1), Node::branch(3035, 1),
    Node::branch(3036, 1), Node::named(0, 0, 247), Node::branch(3037, 1), Node::branch(3038, 1),
    Node::branch(3039, 1), Node::branch(3040, 1), Node::branch(3041, 1), Node::branch(3042, 1),
    Node::branch(3043, 1), Node::branch(3044, 2), Node::branch(3046, 1), Node::branch(3047, 1),
    Node::branch(3048, 1), Node::branch(3049, 1), Node::branch(3050, 1), Node::branch(3051, 1),
    Node::branch(3052, 1), Node::branch(3053, 1), Node::branch(3054, 1), Node::branch(3055, 2),
    Node::branch(3057, 1), Node::named(0, 0, 248), Node::legacy(0, 0, 249), Node::named(0, 0, 250),
    Node::branch(3058, 1), Node::branch(3059, 1), Node::branch(3060, 1), Node::branch(3061, 1),
    Node::branch(3062, 1), Node::branch(3063, 1), Node::branch(3064, 1), Node::named(0, 0, 251),
    Node::branch(3065, 1), Node::branch(3066, 1), Node::branch(3067, 1), Node::named(0, 0, 252),
    Node::branch(3068, 1), Node::branch(3069, 1), Node::branch(3070, 1), Node::branch(3071, 1),
    Node::named(0, 0, 253), Node::branch(3072, 1), Node::branch(3073, 1), Node::branch(3074, 1),
    Node::branch(3075, 1), Node::branch(3076, 1), Node::branch(3077, 1), Node::branch(3078, 1),
    Node::branch(3079, 1), Node::branch(3080, 1), Node::named(0, 0, 254), Node::branch(3081, 1),
    Node::branch(3082, 1), Node::named(0, 0, 255), Node::branch(3083, 1), Node::branch(3084, 1),
    Node::legacy(0, 0, 256), Node::branch(3085, 1), Node::named(0, 0, 257), Node::branch(3086, 1),
    Node::branch(3087, 1), Node::branch(3088, 1), Node::named(0, 0, 258), Node::named(0, 0, 259),
    Node::branch(3089, 1), Node::named(0, 0, 260), Node::branch(3090, 1), Node::named(0, 0, 261),
    Node::legacy(0, 0, 262), Node::branch(3091, 1), Node::branch(3092, 1), Node::branch(3093, 1),
    Node::branch(3094, 1), Node::branch(3095, 1), Node::branch(3096, 1), Node::branch(3097, 1),
    Node::named(0, 0, 263), Node::branch(3098, 1), Node::branch(3099, 1), Node::branch(3100, 1),
    Node::branch(3101, 1), Node::branch(3102, 1), Node::branch(3103, 1), Node::branch(3104, 1),
    Node::branch(3105, 1), Node::branch(3106, 1), Node::named(0, 0, 264), Node::branch(3107, 1),
    Node::branch(3108, 1), Node::branch(3109, 1), Node::named(0, 0, 265), Node::branch(3110, 1),
    Node::branch(3111, 1), Node::named(0, 0, 266), Node::named(0, 0, 267), Node::named(0, 0, 268),
    Node::branch(3112, 1), Node::named(0, 0, 269), Node::branch(3113, 1), Node::branch(3114, 1),
    Node::branch(3115, 1), Node::branch(3116, 1), Node::branch(3117, 1), Node::branch(3118, 1),
    Node::named(0, 0, 270), Node::branch(3119, 1), Node::branch(3120, 1), Node::branch(3121, 1),
    Node::branch(3122, 6), Node::named(0, 0, 271), Node::branch(3128, 1), Node::branch(3129, 1),
    Node::branch(3130, 1), Node::branch(3131, 1), Node::named(0, 0, 272), Node::branch(3132, 1),
    Node::branch(3133, 1), Node::branch(3134, 1), Node::branch(3135, 1), Node::branch(3136, 1),
    Node::named(0, 0, 273), Node::branch(3137, 1), Node::branch(3138, 1), Node::branch(3139, 1),
    Node::named(0, 0, 274), Node::named(0, 0, 275), Node::legacy(0, 0, 276), Node::branch(3140, 1),
    Node::branch(3141, 1), Node::branch(3142, 1), Node::named(0, 0, 277), Node::branch(3143, 1),
    Node::branch(3144, 1), Node::named(0, 0, 278), Node::named(0, 0, 279), Node::branch(3145, 1),
    Node::branch(3146, 1), Node::branch(3147, 1), Node::branch(3148, 1), Node::named(0, 0, 280),
    Node::named(0, 0, 281), Node::branch(3149, 1), Node::named(0, 0, 282), Node::branch(3150, 1),
    Node::branch(3151, 1), Node::branch(3152, 1), Node::branch(3153, 1), Node::named(0, 0, 283),
    Node::branch(3154, 1), Node::named(0, 0, 284), Node::branch(3155, 1), Node::branch(3156, 2),
    Node::named(0, 0, 285), Node::branch(3158, 1), Node::named(0, 0, 286), Node::branch(3159, 1),
    Node::branch(3160, 1), Node::named(0, 0, 287), Node::branch(3161, 1), Node::branch(3162, 1),
    Node::branch(3163, 1), Node::branch(3164, 1), Node::branch(3165, 2), Node::branch(3167, 1),
    Node::branch(3168, 1), Node::named(0, 0, 288), Node::named(0, 0, 289), Node::named(0, 0, 290),
    Node::branch(3169, 1), Node::branch(3170, 1), Node::legacy(0, 0, 291), Node::branch(3171, 1),
    Node::named(0, 0, 292), Node::named(0, 0, 293), Node::branch(3172, 1), Node::branch(3173, 1),
    Node::named(0, 0, 294), Node::named(0, 0, 295), Node::branch(3174, 1), Node::branch(3175, 1),
    Node::named(0, 0, 296), Node::named(0, 0, 297), Node::named(0, 0, 298), Node::branch(3176, 1),
    Node::branch(3177, 1), Node::named(0, 0, 299), Node::branch(3178, 1), Node::named(0, 0, 300),
    Node::branch(3179, 1), Node::branch(3180, 1), Node::branch(3181, 10), Node::branch(3191, 6),
    Node::branch(3197, 1), Node::branch(3198, 1), Node::branch(3199, 4), Node::named(0, 0, 301),
    Node::branch(3203, 1), Node::named(0, 0, 302), Node::branch(3204, 1), Node::branch(3205, 1),
    Node::branch(3206, 1), Node::branch(3207, 1), Node::named(0, 0, 303), Node::named(0, 0, 304),
    Node::named(0, 0, 305), Node::branch(3208, 1), Node::branch(3209, 1), Node::branch(3210, 1),
    Node::branch(3211, 1), Node::branch(3212, 1), Node::branch(3213, 1), Node::branch(3214, 1),
    Node::branch(3215, 1), Node::named(0, 0, 306), Node::branch(3216, 2), Node::branch(3218, 1),
    Node::branch(3219, 3), Node::branch(3222, 1), Node::branch(3223, 1), Node::branch(3224, 1),
    Node::branch(3225, 1), Node::branch(3226, 1), Node::branch(3227, 2), Node::branch(3229, 2),
    Node::branch(3231, 1), Node::branch(3232, 1), Node::named(0, 0, 307), Node::branch(3233, 1),
    Node::branch(3234, 1), Node::branch(3235, 1), Node::branch(3236, 1), Node::branch(3237, 1),
    Node::branch(3238, 1), Node::branch(3239, 1), Node::branch(3240, 1), Node::branch(3241, 1),
    Node::named(0, 0, 308), Node::branch(3242, 1), Node::named(0, 0, 309), Node::branch(3243, 1),
    Node::branch(3244, 1), Node::branch(3245, 1), Node::legacy(0, 0, 310), Node::branch(3246, 2),
    Node::branch(3248, 1), Node::branch(3249, 1), Node::branch(3250, 1), Node::named(0, 0, 311),
    Node::branch(3251, 1), Node::branch(3252, 1), Node::branch(3253, 1), Node::branch(3254, 1),
    Node::named(0, 0, 312), Node::legacy(0, 0, 313), Node::named(0, 0, 314), Node::named(0, 0, 315),
    Node::branch(3255, 1), Node::branch(3256, 1), Node::named(0, 0, 316), Node::named(3257, 1, 317),
    Node::branch(3258, 1), Node::branch(3259, 1), Node::branch(3260, 1), Node::branch(3261, 1),
    Node::named(0, 0, 318), Node::branch(3262, 1), Node::branch(3263, 1), Node::named(0, 0, 319),
    Node::branch(3264, 1), Node::branch(3265, 1), Node::named(0, 0, 320), Node::branch(3266, 1),
    Node::branch(3267, 1), Node::branch(3268, 1), Node::branch(3269, 1), Node::branch(3270, 1),
    Node::branch(3271, 1), Node::branch(3272, 1), Node::branch(3273, 1), Node::named(0, 0, 321),
    Node::named(0, 0, 322), Node::branch(3274, 1), Node::named(0, 0, 323), Node::named(0, 0, 324),
    Node::branch(3275, 1), Node::branch(3276, 1), Node::branch(3277, 1), Node::branch(3278, 1),
    Node::branch(3279, 1), Node::branch(3280, 1), Node::branch(3281, 1), Node::branch(3282, 1),
    Node::named(0, 0, 325), Node::branch(3283, 1), Node::branch(3284, 1), Node::branch(3285, 1),
    Node::branch(3286, 1), Node::branch(3287, 1), Node::branch(3288, 1), Node::branch(3289, 1),
    Node::named(0, 0, 326), Node::branch(3290, 1), Node::named(0, 0, 327), Node::branch(3291, 1),
    Node::branch(3292, 1), Node::named(3293, 1, 328), Node::branch(3294, 1), Node::branch(3295, 1),
    Node::branch(3296, 1), Node::branch(3297, 1), Node::branch(3298, 1), Node::branch(3299, 1),
    Node::branch(3300, 1), Node::branch(3301, 1), Node::branch(3302, 1), Node::named(0, 0, 329),
    Node::branch(3303, 1), Node::branch(3304, 1), Node::branch(3305, 1), Node::branch(3306, 1),
    Node::branch(3307, 1), Node::branch(3308, 1), Node::branch(3309, 1), Node::named(3310, 1, 330),
    Node::branch(3311, 1), Node::named(0, 0, 331), Node::branch(3312, 1), Node::legacy(0, 0, 332),
    Node::branch(3313, 1), Node::named(0, 0, 333), Node::branch(3314, 1), Node::branch(3315, 1),
    Node::named(3316, 1, 334), Node::branch(3317, 1), Node::named(0, 0, 335),
    Node::named(0, 0, 336), Node::branch(3318, 1), Node::branch(3319, 1), Node::branch(3320, 1),
    Node::named(0, 0, 337), Node::named(0, 0, 338), Node::named(0, 0, 339), Node::named(0, 0, 340),
    Node::named(0, 0, 341), Node::named(0, 0, 342), Node::named(0, 0, 343), Node::branch(3321, 1),
    Node::branch(3322, 1), Node::named(0, 0, 344), Node::named(0, 0, 345), Node::named(0, 0, 346),
    Node::named(0, 0, 347), Node::branch(3323, 1), Node::branch(3324, 1), Node::named(0, 0, 348),
    Node::branch(3325, 1), Node::named(0, 0, 349), Node::named(0, 0, 350), Node::named(0, 0, 351),
    Node::branch(3326, 1), Node::branch(3327, 1), Node::branch(3328, 1), Node::branch(3329, 1),
    Node::branch(3330, 1), Node::branch(3331, 1), Node::branch(3332, 1), Node::branch(3333, 1),
    Node::branch(3334, 1), Node::branch(3335, 1), Node::branch(3336, 1), Node::branch(3337, 1),
    Node::named(0, 0, 352), Node::branch(3338, 1), Node::named(0, 0, 353), Node::named(0, 0, 354),
    Node::branch(3339, 1), Node::branch(3340, 1), Node::branch(3341, 1), Node::branch(3342, 2),
    Node::branch(3344, 1), Node::branch(3345, 1), Node::named(0, 0, 355), Node::branch(3346, 1),
    Node::named(0, 0, 356), Node::named(0, 0, 357), Node::branch(3347, 1), Node::branch(3348, 1),
    Node::named(0, 0, 358), Node::branch(3349, 1), Node::branch(3350, 1), Node::legacy(0, 0, 359),
    Node::branch(3351, 1), Node::branch(3352, 1), Node::named(0, 0, 360), Node::branch(3353, 4),
    Node::branch(3357, 1), Node::branch(3358, 1), Node::named(3359, 1, 361), Node::branch(3360, 1),
    Node::branch(3361, 1), Node::branch(3362, 1), Node::branch(3363, 1), Node::branch(3364, 1),
    Node::branch(3365, 1), Node::named(0, 0, 362), Node::named(0, 0, 363), Node::branch(3366, 1),
    Node::branch(3367, 3), Node::branch(3370, 3), Node::branch(3373, 2), Node::branch(3375, 1),
    Node::branch(3376, 1), Node::branch(3377, 1), Node::branch(3378, 1), Node::branch(3379, 1),
    Node::branch(3380, 1), Node::branch(3381, 1), Node::branch(3382, 2), Node::branch(3384, 1),
    Node::branch(3385, 1), Node::branch(3386, 1), Node::named(0, 0, 364), Node::named(0, 0, 365),
    Node::branch(3387, 1), Node::branch(3388, 1), Node::branch(3389, 4), Node::named(3393, 4, 366),
    Node::branch(3397, 4), Node::named(3401, 6, 367), Node::branch(3407, 1), Node::branch(3408, 4),
    Node::named(3412, 4, 368), Node::branch(3416, 1), Node::branch(3417, 1), Node::branch(3418, 1),
    Node::branch(3419, 4), Node::named(3423, 6, 369), Node::branch(3429, 1), Node::branch(3430, 1),
    Node::branch(3431, 1), Node::named(0, 0, 370), Node::branch(3432, 1), Node::named(3433, 1, 371),
    Node::named(3434, 2, 372), Node::named(3436, 1, 373), Node::named(3437, 2, 374),
    Node::branch(3439, 1), Node::branch(3440, 1), Node::branch(3441, 1), Node::branch(3442, 2),
    Node::branch(3444, 1), Node::named(0, 0, 375), Node::branch(3445, 1), Node::branch(3446, 1),
    Node::branch(3447, 1), Node::branch(3448, 1), Node::branch(3449, 1), Node::branch(3450, 1),
    Node::branch(3451, 1), Node::named(0, 0, 376), Node::branch(3452, 1), Node::branch(3453, 1),
    Node::legacy(3454, 1, 377), Node::named(0, 0, 378), Node::branch(3455, 1),
    Node::named(0, 0, 379), Node::named(3456, 2, 380), Node::named(0, 0, 381),
    Node::branch(3458, 1), Node::branch(3459, 1), Node::branch(3460, 1), Node::branch(3461, 1),
    Node::branch(3462, 1), Node::branch(3463, 1), Node::named(3464, 2, 382),
    Node::named(3466, 1, 383), Node::branch(3467, 1), Node::named(0, 0, 384), Node::branch(3468, 1),
    Node::legacy(3469, 1, 262), Node::branch(3470, 1), Node::branch(3471, 1),
    Node::named(0, 0, 385), Node::named(3472, 1, 386), Node::named(3473, 1, 387),
    Node::branch(3474, 1), Node::branch(3475, 1), Node::branch(3476, 1), Node::branch(3477, 1),
    Node::branch(3478, 1), Node::branch(3479, 1), Node::branch(3480, 2), Node::branch(3482, 1),
    Node::branch(3483, 1), Node::named(0, 0, 388), Node::branch(3484, 1), Node::branch(3485, 1),
    Node::branch(3486, 1), Node::branch(3487, 1), Node::branch(3488, 1), Node::branch(3489, 1),
    Node::branch(3490, 1), Node::branch(3491, 1), Node::branch(3492, 1), Node::named(0, 0, 389),
    Node::named(0, 0, 390), Node::branch(3493, 1), Node::branch(3494, 1), Node::named(0, 0, 391),
    Node::named(3495, 1, 392), Node::branch(3496, 1), Node::branch(3497, 1), Node::branch(3498, 1),
    Node::branch(3499, 1), Node::branch(3500, 1), Node::branch(3501, 1), Node::branch(3502, 1),
    Node::branch(3503, 1), Node::branch(3504, 1), Node::branch(3505, 2), Node::named(3507, 2, 393),
    Node::branch(3509, 1), Node::branch(3510, 1), Node::branch(3511, 1), Node::branch(3512, 1),
    Node::named(0, 0, 394), Node::branch(3513, 1), Node::branch(3514, 1), Node::branch(3515, 1),
    Node::named(0, 0, 395), Node::branch(3516, 1), Node::branch(3517, 1), Node::branch(3518, 1),
    Node::branch(3519, 1), Node::branch(3520, 1), Node::branch(3521, 3), Node::branch(3524, 1),
    Node::branch(3525, 1), Node::branch(3526, 1), Node::named(0, 0, 396), Node::named(0, 0, 397),
    Node::named(0, 0, 398), Node::branch(3527, 1), Node::branch(3528, 1), Node::named(3529, 1, 399),
    Node::branch(3530, 1), Node::branch(3531, 1), Node::branch(3532, 1), Node::named(0, 0, 400),
    Node::branch(3533, 1), Node::branch(3534, 1), Node::named(0, 0, 401), Node::branch(3535, 1),
    Node::branch(3536, 1), Node::branch(3537, 1), Node::named(3538, 1, 402), Node::branch(3539, 1),
    Node::named(0, 0, 403), Node::branch(3540, 1), Node::branch(3541, 1), Node::branch(3542, 1),
    Node::branch(3543, 1), Node::branch(3544, 1), Node::branch(3545, 1), Node::branch(3546, 1),
    Node::named(3547, 1, 404), Node::named(0, 0, 405), Node::branch(3548, 1),
    Node::named(0, 0, 406), Node::named(3549, 1, 407), Node::branch(3550, 1),
    Node::named(3551, 2, 408), Node::branch(3553, 1), Node::branch(3554, 1), Node::branch(3555, 1),
    Node::branch(3556, 1), Node::branch(3557, 1), Node::branch(3558, 1), Node::branch(3559, 1),
    Node::branch(3560, 1), Node::branch(3561, 1), Node::branch(3562, 1), Node::named(0, 0, 409),
    Node::branch(3563, 1), Node::named(0, 0, 410), Node::legacy(0, 0, 411), Node::named(0, 0, 412),
    Node::named(0, 0, 413), Node::branch(3564, 1), Node::branch(3565, 1), Node::branch(3566, 1),
    Node::branch(3567, 1), Node::branch(3568, 1), Node::branch(3569, 1), Node::branch(3570, 1),
    Node::branch(3571, 1), Node::branch(3572, 1), Node::branch(3573, 1), Node::named(0, 0, 414),
    Node::branch(3574, 1), Node::branch(3575, 1), Node::named(0, 0, 415), Node::named(0, 0, 416),
    Node::branch(3576, 1), Node::named(3577, 1, 417), Node::branch(3578, 1), Node::branch(3579, 6),
    Node::branch(3585, 1), Node::branch(3586, 1), Node::named(0, 0, 418), Node::branch(3587, 1),
    Node::branch(3588, 1), Node::branch(3589, 1), Node::branch(3590, 1), Node::named(0, 0, 419),
    Node::named(0, 0, 23), Node::branch(3591, 1), Node::branch(3592, 1), Node::branch(3593, 1),
    Node::named(3594, 1, 420), Node::branch(3595, 1), Node::named(0, 0, 421),
    Node::named(3596, 1, 422), Node::named(3597, 1, 162), Node::branch(3598, 1),
    Node::named(0, 0, 423), Node::branch(3599, 1), Node::named(0, 0, 424),
    Node::named(3600, 2, 425), Node::named(0, 0, 426), Node::branch(3602, 1), Node::branch(3603, 1),
    Node::branch(3604, 1), Node::branch(3605, 1), Node::branch(3606, 2), Node::branch(3608, 1),
    Node::branch(3609, 1), Node::branch(3610, 1), Node::branch(3611, 1), Node::branch(3612, 1),
    Node::named(0, 0, 427), Node::named(0, 0, 165), Node::branch(3613, 1), Node::named(0, 0, 428),
    Node::branch(3614, 1), Node::branch(3615, 1), Node::named(3616, 2, 429), Node::named(0, 0, 430),
    Node::branch(3618, 1), Node::branch(3619, 1), Node::branch(3620, 1), Node::branch(3621, 1),
    Node::branch(3622, 1), Node::branch(3623, 1), Node::branch(3624, 1), Node::branch(3625, 1),
    Node::branch(3626, 2), Node::named(0, 0, 431), Node::branch(3628, 1), Node::named(0, 0, 432),
    Node::branch(3629, 1), Node::branch(3630, 1), Node::branch(3631, 1), Node::branch(3632, 1),
    Node::branch(3633, 1), Node::branch(3634, 1), Node::named(0, 0, 433), Node::branch(3635, 1),
    Node::branch(3636, 1), Node::branch(3637, 1), Node::branch(3638, 1), Node::branch(3639, 1),
    Node::branch(3640, 1), Node::branch(3641, 1), Node::branch(3642, 1), Node::branch(3643, 3),
    Node::branch(3646, 1), Node::named(0, 0, 434), Node::branch(3647, 1), Node::branch(3648, 1),
    Node::branch(3649, 1), Node::branch(3650, 1), Node::branch(3651, 1), Node::branch(3652, 2),
    Node::branch(3654, 1), Node::branch(3655, 1), Node::named(0, 0, 435), Node::branch(3656, 1),
    Node::named(0, 0, 436), Node::named(0, 0, 437), Node::branch(3657, 1), Node::branch(3658, 1),
    Node::named(0, 0, 438), Node::named(3659, 4, 28), Node::branch(3663, 1), Node::branch(3664, 1),
    Node::legacy(0, 0, 439), Node::branch(3665, 1), Node::branch(3666, 1), Node::named(0, 0, 440),
    Node::named(0, 0, 441), Node::branch(3667, 1), Node::branch(3668, 1), Node::branch(3669, 1),
    Node::branch(3670, 1), Node::branch(3671, 1), Node::named(0, 0, 442), Node::named(0, 0, 443),
    Node::named(0, 0, 444), Node::named(0, 0, 445), Node::branch(3672, 1), Node::named(0, 0, 446),
    Node::branch(3673, 1), Node::branch(3674, 1), Node::named(0, 0, 447), Node::branch(3675, 1),
    Node::branch(3676, 1), Node::branch(3677, 1), Node::branch(3678, 1), Node::named(3679, 2, 448),
    Node::branch(3681, 1), Node::named(3682, 7, 449), Node::branch(3689, 1),
    Node::named(3690, 1, 450), Node::branch(3691, 1), Node::branch(3692, 1), Node::branch(3693, 1),
    Node::branch(3694, 2), Node::branch(3696, 1), Node::branch(3697, 1), Node::branch(3698, 1),
    Node::named(0, 0, 451), Node::named(0, 0, 452), Node::branch(3699, 1), Node::branch(3700, 1),
    Node::branch(3701, 1), Node::named(0, 0, 453), Node::branch(3702, 5), Node::named(0, 0, 30),
    Node::branch(3707, 1), Node::branch(3708, 1), Node::branch(3709, 1), Node::named(3710, 1, 454),
    Node::branch(3711, 5), Node::branch(3716, 1), Node::branch(3717, 1), Node::branch(3718, 2),
    Node::branch(3720, 1), Node::named(0, 0, 455), Node::branch(3721, 1), Node::branch(3722, 1),
    Node::branch(3723, 1), Node::branch(3724, 1), Node::branch(3725, 1), Node::branch(3726, 1),
    Node::named(3727, 1, 456), Node::named(3728, 1, 181), Node::branch(3729, 1),
    Node::branch(3730, 1), Node::branch(3731, 1), Node::branch(3732, 1), Node::branch(3733, 3),
    Node::branch(3736, 1), Node::branch(3737, 1), Node::named(0, 0, 457), Node::branch(3738, 1),
    Node::branch(3739, 1), Node::branch(3740, 1), Node::branch(3741, 1), Node::branch(3742, 1),
    Node::named(0, 0, 458), Node::named(3743, 1, 459), Node::branch(3744, 1), Node::branch(3745, 1),
    Node::branch(3746, 1), Node::branch(3747, 1), Node::branch(3748, 1), Node::named(0, 0, 460),
    Node::named(3749, 2, 461), Node::named(0, 0, 462), Node::branch(3751, 1), Node::branch(3752, 1),
    Node::named(0, 0, 463), Node::branch(3753, 1), Node::branch(3754, 1), Node::branch(3755, 1),
    Node::branch(3756, 1), Node::branch(3757, 1), Node::branch(3758, 1), Node::branch(3759, 1),
    Node::named(3760, 2, 464), Node::branch(3762, 1), Node::branch(3763, 1), Node::branch(3764, 1),
    Node::named(0, 0, 465), Node::branch(3765, 1), Node::legacy(0, 0, 466), Node::named(0, 0, 467),
    Node::named(3766, 1, 468), Node::branch(3767, 1), Node::branch(3768, 1), Node::branch(3769, 1),
    Node::branch(3770, 1), Node::branch(3771, 1), Node::branch(3772, 1), Node::branch(3773, 1),
    Node::branch(3774, 1), Node::branch(3775, 1), Node::branch(3776, 1), Node::named(0, 0, 469),
    Node::named(0, 0, 470), Node::branch(3777, 1), Node::branch(3778, 1), Node::named(0, 0, 471),
    Node::named(0, 0, 472), Node::branch(3779, 1), Node::branch(3780, 1), Node::branch(3781, 1),
    Node::named(0, 0, 473), Node::branch(3782, 1), Node::named(0, 0, 474), Node::branch(3783, 1),
    Node::branch(3784, 1), Node::branch(3785, 1), Node::branch(3786, 1), Node::branch(3787, 1),
    Node::named(0, 0, 475), Node::named(0, 0, 476), Node::branch(3788, 1), Node::branch(3789, 1),
    Node::branch(3790, 1), Node::branch(3791, 1), Node::legacy(0, 0, 477), Node::branch(3792, 1),
    Node::named(0, 0, 478), Node::branch(3793, 1), Node::branch(3794, 1), Node::branch(3795, 1),
    Node::named(0, 0, 479), Node::branch(3796, 1), Node::branch(3797, 1), Node::branch(3798, 2),
    Node::branch(3800, 1), Node::branch(3801, 1), Node::branch(3802, 1), Node::branch(3803, 1),
    Node::branch(3804, 1), Node::named(3805, 2, 197), Node::named(0, 0, 480), Node::branch(3807, 1),
    Node::named(0, 0, 198), Node::branch(3808, 1), Node::branch(3809, 1), Node::branch(3810, 1),
    Node::named(0, 0, 481), Node::named(0, 0, 482), Node::branch(3811, 1), Node::branch(3812, 1),
    Node::named(0, 0, 483), Node::branch(3813, 1), Node::named(3814, 2, 201),
    Node::named(3816, 1, 484), Node::branch(3817, 1), Node::branch(3818, 1), Node::named(0, 0, 485),
    Node::named(0, 0, 486), Node::branch(3819, 1), Node::branch(3820, 1), Node::named(3821, 3, 487),
    Node::branch(3824, 1), Node::branch(3825, 1), Node::named(3826, 1, 488), Node::branch(3827, 1),
    Node::branch(3828, 1), Node::branch(3829, 1), Node::branch(3830, 1), Node::branch(3831, 1),
    Node::named(0, 0, 489), Node::named(0, 0, 490), Node::branch(3832, 1),
    Node::named(3833, 1, 491), Node::branch(3834, 1), Node::branch(3835, 1), Node::branch(3836, 1),
    Node::named(3837, 3, 492), Node::branch(3840, 1), Node::named(3841, 3, 493),
    Node::named(0, 0, 494), Node::branch(3844, 1), Node::named(0, 0, 495), Node::branch(3845, 1),
    Node::branch(3846, 1), Node::branch(3847, 1), Node::branch(3848, 1), Node::branch(3849, 1),
    Node::named(0, 0, 496), Node::branch(3850, 1), Node::named(0, 0, 497), Node::named(0, 0, 498),
    Node::branch(3851, 1), Node::branch(3852, 1), Node::named(0, 0, 499), Node::named(3853, 1, 500),
    Node::branch(3854, 1), Node::branch(3855, 1), Node::branch(3856, 1), Node::branch(3857, 1),
    Node::branch(3858, 2), Node::branch(3860, 1), Node::branch(3861, 1), Node::named(0, 0, 501),
    Node::named(3862, 1, 502), Node::branch(3863, 1), Node::branch(3864, 1), Node::named(0, 0, 503),
    Node::named(0, 0, 504), Node::branch(3865, 1), Node::branch(3866, 1), Node::branch(3867, 1),
    Node::named(0, 0, 505), Node::branch(3868, 1), Node::branch(3869, 1), Node::named(0, 0, 506),
    Node::branch(3870, 1), Node::branch(3871, 1), Node::branch(3872, 1), Node::branch(3873, 1),
    Node::branch(3874, 1), Node::branch(3875, 1), Node::branch(3876, 1), Node::named(0, 0, 507),
    Node::branch(3877, 1), Node::named(0, 0, 508), Node::named(0, 0, 509), Node::branch(3878, 1),
    Node::branch(3879, 1), Node::branch(3880, 1), Node::branch(3881, 1), Node::legacy(0, 0, 510),
    Node::legacy(0, 0, 511), Node::branch(3882, 1), Node::named(0, 0, 512), Node::branch(3883, 1),
    Node::named(0, 0, 513), Node::branch(3884, 1), Node::named(0, 0, 514), Node::branch(3885, 1),
    Node::branch(3886, 1), Node::legacy(0, 0, 515), Node::branch(3887, 1),
    Node::legacy(3888, 1, 516), Node::branch(3889, 2), Node::named(0, 0, 517),
    Node::branch(3891, 1), Node::branch(3892, 1), Node::branch(3893, 1), Node::named(0, 0, 131),
    Node::branch(3894, 1), Node::named(0, 0, 518), Node::branch(3895, 1), Node::branch(3896, 1),
    Node::branch(3897, 1), Node::branch(3898, 2), Node::named(3900, 8, 519), Node::branch(3908, 1),
    Node::named(0, 0, 520), Node::branch(3909, 1), Node::named(0, 0, 521), Node::branch(3910, 1),
    Node::named(3911, 5, 42), Node::branch(3916, 1), Node::named(0, 0, 522), Node::branch(3917, 1),
    Node::branch(3918, 1), Node::named(0, 0, 523), Node::branch(3919, 3), Node::named(3922, 1, 524),
    Node::branch(3923, 1), Node::branch(3924, 1), Node::named(0, 0, 525), Node::branch(3925, 1),
    Node::named(0, 0, 526), Node::named(0, 0, 527), Node::branch(3926, 1), Node::named(0, 0, 528),
    Node::branch(3927, 2), Node::branch(3929, 1), Node::legacy(0, 0, 313), Node::branch(3930, 1),
    Node::named(0, 0, 529), Node::branch(3931, 1), Node::branch(3932, 1), Node::named(0, 0, 530),
    Node::named(0, 0, 531), Node::branch(3933, 1), Node::branch(3934, 1), Node::branch(3935, 1),
    Node::named(3936, 3, 532), Node::branch(3939, 1), Node::named(3940, 10, 533),
    Node::branch(3950, 1), Node::branch(3951, 1), Node::branch(3952, 1), Node::branch(3953, 1),
    Node::branch(3954, 1), Node::branch(3955, 2), Node::branch(3957, 1), Node::branch(3958, 1),
    Node::branch(3959, 1), Node::named(0, 0, 534), Node::named(0, 0, 535), Node::branch(3960, 1),
    Node::branch(3961, 1), Node::named(0, 0, 536), Node::named(3962, 3, 13), Node::named(0, 0, 537),
    Node::branch(3965, 1), Node::branch(3966, 1), Node::branch(3967, 2), Node::named(0, 0, 538),
    Node::branch(3969, 1), Node::named(0, 0, 539), Node::branch(3970, 1), Node::branch(3971, 1),
    Node::branch(3972, 1), Node::branch(3973, 1), Node::branch(3974, 1), Node::branch(3975, 1),
    Node::branch(3976, 1), Node::branch(3977, 1), Node::branch(3978, 1), Node::named(0, 0, 540),
    Node::branch(3979, 1), Node::branch(3980, 1), Node::named(3981, 1, 541), Node::branch(3982, 1),
    Node::branch(3983, 1), Node::branch(3984, 1), Node::named(0, 0, 542), Node::named(0, 0, 543),
    Node::branch(3985, 1), Node::branch(3986, 1), Node::branch(3987, 1), Node::named(3988, 3, 544),
    Node::branch(3991, 1), Node::branch(3992, 1), Node::branch(3993, 1), Node::named(0, 0, 545),
    Node::branch(3994, 1), Node::branch(3995, 1), Node::branch(3996, 1), Node::branch(3997, 1),
    Node::named(0, 0, 546), Node::branch(3998, 1), Node::branch(3999, 1), Node::branch(4000, 1),
    Node::branch(4001, 1), Node::named(4002, 2, 547), Node::branch(4004, 1), Node::branch(4005, 2),
    Node::legacy(0, 0, 548), Node::named(0, 0, 549), Node::branch(4007, 1), Node::branch(4008, 2),
    Node::named(0, 0, 550), Node::branch(4010, 1), Node::branch(4011, 1), Node::branch(4012, 1),
    Node::named(0, 0, 551), Node::branch(4013, 1), Node::branch(4014, 1), Node::branch(4015, 1),
    Node::named(4016, 1, 552), Node::named(4017, 1, 553), Node::named(4018, 1, 554),
    Node::branch(4019, 1), Node::branch(4020, 1), Node::branch(4021, 1), Node::branch(4022, 1),
    Node::branch(4023, 1), Node::branch(4024, 1), Node::branch(4025, 1), Node::named(0, 0, 188),
    Node::branch(4026, 1), Node::named(4027, 1, 555), Node::branch(4028, 1),
    Node::named(4029, 1, 556), Node::named(0, 0, 557), Node::branch(4030, 1),
    Node::named(0, 0, 214), Node::branch(4031, 1), Node::branch(4032, 1), Node::branch(4033, 2),
    Node::branch(4035, 1), Node::named(0, 0, 558), Node::branch(4036, 1), Node::named(0, 0, 559),
    Node::branch(4037, 1), Node::branch(4038, 1), Node::branch(4039, 1), Node::named(4040, 1, 560),
    Node::branch(4041, 1), Node::branch(4042, 1), Node::named(0, 0, 561), Node::branch(4043, 1),
    Node::named(4044, 1, 562), Node::branch(4045, 1), Node::branch(4046, 2), Node::branch(4048, 1),
    Node::branch(4049, 1), Node::branch(4050, 3), Node::named(4053, 5, 44), Node::named(0, 0, 563),
    Node::legacy(0, 0, 564), Node::legacy(0, 0, 565), Node::legacy(0, 0, 566),
    Node::named(0, 0, 567), Node::branch(4058, 2), Node::named(4060, 1, 568), Node::branch(4061, 1),
    Node::branch(4062, 1), Node::branch(4063, 1), Node::branch(4064, 2), Node::branch(4066, 1),
    Node::branch(4067, 3), Node::branch(4070, 1), Node::branch(4071, 2), Node::branch(4073, 1),
    Node::branch(4074, 1), Node::branch(4075, 1), Node::named(0, 0, 569), Node::branch(4076, 1),
    Node::branch(4077, 1), Node::named(0, 0, 570), Node::branch(4078, 1), Node::branch(4079, 1),
    Node::branch(4080, 1), Node::branch(4081, 1), Node::branch(4082, 1), Node::branch(4083, 1),
    Node::branch(4084, 1), Node::branch(4085, 1), Node::branch(4086, 1), Node::branch(4087, 1),
    Node::named(0, 0, 571), Node::named(0, 0, 572), Node::branch(4088, 1), Node::branch(4089, 1),
    Node::named(4090, 1, 573), Node::named(0, 0, 574), Node::branch(4091, 1), Node::branch(4092, 1),
    Node::branch(4093, 1), Node::branch(4094, 1), Node::named(0, 0, 575), Node::branch(4095, 1),
    Node::branch(4096, 1), Node::branch(4097, 1), Node::branch(4098, 1), Node::branch(4099, 1),
    Node::named(0, 0, 576), Node::named(0, 0, 577), Node::branch(4100, 1), Node::branch(4101, 1),
    Node::branch(4102, 1), Node::branch(4103, 1), Node::named(0, 0, 578), Node::named(0, 0, 579),
    Node::branch(4104, 1), Node::named(0, 0, 580), Node::branch(4105, 1), Node::branch(4106, 1),
    Node::branch(4107, 1), Node::branch(4108, 1), Node::branch(4109, 1), Node::branch(4110, 1),
    Node::branch(4111, 1), Node::branch(4112, 1), Node::branch(4113, 2), Node::branch(4115, 1),
    Node::branch(4116, 1), Node::branch(4117, 1), Node::branch(4118, 1), Node::branch(4119, 1),
    Node::branch(4120, 1), Node::named(0, 0, 581), Node::branch(4121, 1), Node::branch(4122, 1),
    Node::branch(4123, 1), Node::branch(4124, 1), Node::named(4125, 2, 582), Node::branch(4127, 1),
    Node::branch(4128, 1), Node::branch(4129, 1), Node::branch(4130, 1), Node::branch(4131, 1),
    Node::named(0, 0, 583), Node::branch(4132, 1), Node::branch(4133, 1), Node::named(4134, 1, 584),
    Node::branch(4135, 1), Node::legacy(0, 0, 585), Node::branch(4136, 1), Node::named(0, 0, 586),
    Node::named(4137, 1, 587), Node::branch(4138, 1), Node::branch(4139, 1), Node::branch(4140, 1),
    Node::branch(4141, 1), Node::branch(4142, 1), Node::branch(4143, 3), Node::named(4146, 1, 588),
    Node::branch(4147, 2), Node::branch(4149, 2), Node::branch(4151, 1), Node::branch(4152, 1),
    Node::branch(4153, 1), Node::branch(4154, 1), Node::branch(4155, 1), Node::named(0, 0, 589),
    Node::branch(4156, 1), Node::branch(4157, 2), Node::named(0, 0, 590), Node::branch(4159, 1),
    Node::branch(4160, 1), Node::named(0, 0, 591), Node::branch(4161, 1), Node::branch(4162, 1),
    Node::branch(4163, 1), Node::branch(4164, 1), Node::branch(4165, 1), Node::branch(4166, 1),
    Node::branch(4167, 1), Node::named(0, 0, 592), Node::branch(4168, 1), Node::named(0, 0, 593),
    Node::named(0, 0, 594), Node::branch(4169, 1), Node::named(0, 0, 595), Node::branch(4170, 1),
    Node::branch(4171, 1), Node::branch(4172, 1), Node::branch(4173, 1), Node::branch(4174, 1),
    Node::named(0, 0, 596), Node::named(0, 0, 597), Node::branch(4175, 1), Node::named(0, 0, 598),
    Node::branch(4176, 1), Node::branch(4177, 1), Node::branch(4178, 1), Node::branch(4179, 1),
    Node::named(0, 0, 599), Node::branch(4180, 1), Node::branch(4181, 1), Node::branch(4182, 1),
    Node::named(0, 0, 111), Node::branch(4183, 1), Node::branch(4184, 1), Node::named(0, 0, 600),
    Node::branch(4185, 1), Node::named(0, 0, 601), Node::named(0, 0, 602), Node::named(0, 0, 603),
    Node::named(0, 0, 604), Node::legacy(0, 0, 605), Node::branch(4186, 1), Node::branch(4187, 1),
    Node::named(0, 0, 606), Node::branch(4188, 1), Node::named(0, 0, 607), Node::named(0, 0, 608),
    Node::branch(4189, 1), Node::named(0, 0, 609), Node::named(0, 0, 610), Node::named(0, 0, 611),
    Node::legacy(0, 0, 612), Node::branch(4190, 1), Node::branch(4191, 1), Node::legacy(0, 0, 613),
    Node::branch(4192, 1), Node::named(0, 0, 614), Node::named(0, 0, 615), Node::named(0, 0, 616),
    Node::branch(4193, 1), Node::legacy(0, 0, 617), Node::branch(4194, 1), Node::branch(4195, 1),
    Node::branch(4196, 1), Node::branch(4197, 1), Node::branch(4198, 1), Node::branch(4199, 1),
    Node::named(0, 0, 618), Node::branch(4200, 1), Node::branch(4201, 1), Node::branch(4202, 1),
    Node::branch(4203, 1), Node::branch(4204, 1), Node::branch(4205, 1), Node::named(0, 0, 619),
    Node::branch(4206, 1), Node::branch(4207, 1), Node::branch(4208, 1), Node::branch(4209, 1),
    Node::branch(4210, 1), Node::branch(4211, 1), Node::named(4212, 1, 620), Node::branch(4213, 1),
    Node::branch(4214, 1), Node::branch(4215, 1), Node::branch(4216, 1), Node::branch(4217, 1),
    Node::named(0, 0, 621), Node::branch(4218, 1), Node::branch(4219, 1), Node::branch(4220, 1),
    Node::named(0, 0, 622), Node::branch(4221, 1), Node::named(0, 0, 623), Node::branch(4222, 1),
    Node::branch(4223, 1), Node::branch(4224, 1), Node::branch(4225, 1), Node::branch(4226, 1),
    Node::branch(4227, 1), Node::branch(4228, 1), Node::branch(4229, 1), Node::branch(4230, 1),
    Node::branch(4231, 1), Node::branch(4232, 1), Node::branch(4233, 1), Node::branch(4234, 1),
    Node::branch(4235, 1), Node::branch(4236, 1), Node::legacy(0, 0, 624), Node::branch(4237, 1),
    Node::branch(4238, 1), Node::named(0, 0, 625), Node::branch(4239, 2), Node::named(0, 0, 626),
    Node::branch(4241, 1), Node::named(4242, 1, 627), Node::branch(4243, 1), Node::branch(4244, 1),
    Node::branch(4245, 1), Node::branch(4246, 1), Node::branch(4247, 1), Node::branch(4248, 1),
    Node::named(4249, 1, 628), Node::branch(4250, 1), Node::branch(4251, 1), Node::named(0, 0, 629),
    Node::branch(4252, 1), Node::branch(4253, 1), Node::named(0, 0, 630), Node::named(0, 0, 631),
    Node::branch(4254, 1), Node::branch(4255, 1), Node::branch(4256, 1), Node::branch(4257, 1),
    Node::branch(4258, 1), Node::named(0, 0, 632), Node::branch(4259, 1), Node::legacy(0, 0, 633),
    Node::branch(4260, 1), Node::named(0, 0, 634), Node::branch(4261, 1), Node::branch(4262, 1),
    Node::branch(4263, 1), Node::branch(4264, 1), Node::branch(4265, 1), Node::named(0, 0, 635),
    Node::branch(4266, 1), Node::named(0, 0, 636), Node::named(0, 0, 637), Node::branch(4267, 1),
    Node::named(0, 0, 638), Node::named(0, 0, 639), Node::branch(4268, 1), Node::branch(4269, 1),
    Node::branch(4270, 1), Node::branch(4271, 1), Node::branch(4272, 1), Node::branch(4273, 1),
    Node::branch(4274, 2), Node::branch(4276, 1), Node::branch(4277, 1), Node::branch(4278, 1),
    Node::branch(4279, 1), Node::branch(4280, 2), Node::branch(4282, 1), Node::branch(4283, 1),
    Node::branch(4284, 1), Node::branch(4285, 1), Node::branch(4286, 1), Node::branch(4287, 1),
    Node::branch(4288, 1), Node::branch(4289, 1), Node::branch(4290, 1), Node::branch(4291, 1),
    Node::branch(4292, 1), Node::branch(4293, 1), Node::branch(4294, 1), Node::branch(4295, 1),
    Node::branch(4296, 1), Node::branch(4297, 1), Node::branch(4298, 2), Node::branch(4300, 1),
    Node::branch(4301, 1), Node::branch(4302, 1), Node::branch(4303, 1), Node::branch(4304, 1),
    Node::branch(4305, 1), Node::branch(4306, 1), Node::branch(4307, 1), Node::branch(4308, 1),
    Node::branch(4309, 1), Node::branch(4310, 1), Node::branch(4311, 1), Node::branch(4312, 1),
    Node::branch(4313, 1), Node::branch(4314, 1), Node::branch(4315, 1), Node::branch(4316, 1),
    Node::branch(4317, 1), Node::branch(4318, 1), Node::branch(4319, 1), Node::branch(4320, 2),
    Node::branch(4322, 1), Node::branch(4323, 1), Node::branch(4324, 1), Node::branch(4325, 1),
    Node::branch(4326, 1), Node::branch(4327, 3), Node::branch(4330, 1), Node::branch(4331, 1),
    Node::branch(4332, 1), Node::named(0, 0, 640), Node::branch(4333, 1), Node::legacy(0, 0, 641),
    Node::branch(4334, 1), Node::branch(4335, 1), Node::named(0, 0, 642), Node::named(0, 0, 210),
    Node::branch(4336, 1), Node::branch(4337, 1), Node::branch(4338, 1), Node::branch(4339, 1),
    Node::branch(4340, 1), Node::branch(4341, 2), Node::branch(4343, 1), Node::branch(4344, 1),
    Node::branch(4345, 1), Node::branch(4346, 1), Node::branch(4347, 1), Node::named(0, 0, 643),
    Node::branch(4348, 1), Node::branch(4349, 1), Node::named(0, 0, 644), Node::branch(4350, 1),
    Node::branch(4351, 1), Node::branch(4352, 1), Node::branch(4353, 1), Node::branch(4354, 1),
    Node::branch(4355, 8), Node::branch(4363, 1), Node::branch(4364, 1), Node::branch(4365, 1),
    Node::branch(4366, 1), Node::branch(4367, 1), Node::branch(4368, 1), Node::branch(4369, 1),
    Node::branch(4370, 1), Node::named(0, 0, 645), Node::branch(4371, 4), Node::named(0, 0, 646),
    Node::branch(4375, 1), Node::branch(4376, 1), Node::branch(4377, 1), Node::branch(4378, 1),
    Node::branch(4379, 1), Node::branch(4380, 1), Node::branch(4381, 1), Node::legacy(0, 0, 647),
    Node::named(0, 0, 648), Node::named(0, 0, 649), Node::branch(4382, 1), Node::branch(4383, 1),
    Node::branch(4384, 1), Node::named(0, 0, 650), Node::branch(4385, 1), Node::branch(4386, 1),
    Node::named(4387, 3, 232), Node::branch(4390, 1), Node::branch(4391, 1), Node::branch(4392, 1),
    Node::branch(4393, 1), Node::named(0, 0, 651), Node::branch(4394, 1), Node::legacy(0, 0, 652),
    Node::branch(4395, 1), Node::branch(4396, 1), Node::named(0, 0, 653), Node::branch(4397, 2),
    Node::named(4399, 1, 595), Node::named(0, 0, 654), Node::branch(4400, 1), Node::branch(4401, 1),
    Node::branch(4402, 1), Node::named(4403, 1, 131), Node::branch(4404, 1), Node::branch(4405, 1),
    Node::branch(4406, 2), Node::branch(4408, 1), Node::named(0, 0, 655), Node::branch(4409, 1),
    Node::named(0, 0, 656), Node::named(4410, 1, 657), Node::branch(4411, 1), Node::branch(4412, 1),
    Node::branch(4413, 1), Node::branch(4414, 1), Node::named(0, 0, 658), Node::named(0, 0, 659),
    Node::branch(4415, 1), Node::named(0, 0, 660), Node::branch(4416, 1), Node::branch(4417, 1),
    Node::branch(4418, 1), Node::branch(4419, 1), Node::branch(4420, 1), Node::legacy(0, 0, 661),
    Node::legacy(0, 0, 662), Node::legacy(0, 0, 663), Node::branch(4421, 1), Node::branch(4422, 1),
    Node::named(0, 0, 664), Node::named(0, 0, 665), Node::named(0, 0, 666), Node::named(0, 0, 667),
    Node::branch(4423, 1), Node::branch(4424, 1), Node::named(0, 0, 124), Node::branch(4425, 1),
    Node::named(4426, 1, 668), Node::branch(4427, 1), Node::named(0, 0, 617), Node::branch(4428, 1),
    Node::named(0, 0, 669), Node::branch(4429, 1), Node::branch(4430, 1), Node::legacy(0, 0, 670),
    Node::named(4431, 1, 18), Node::branch(4432, 1), Node::branch(4433, 1), Node::named(0, 0, 671),
    Node::branch(4434, 1), Node::branch(4435, 1), Node::branch(4436, 1), Node::branch(4437, 1),
    Node::branch(4438, 1), Node::branch(4439, 1), Node::branch(4440, 1), Node::named(0, 0, 672),
    Node::named(0, 0, 673), Node::branch(4441, 1), Node::branch(4442, 1), Node::named(0, 0, 674),
    Node::branch(4443, 1), Node::branch(4444, 1), Node::branch(4445, 1), Node::branch(4446, 1),
    Node::branch(4447, 1), Node::branch(4448, 1), Node::branch(4449, 1), Node::branch(4450, 1),
    Node::branch(4451, 1), Node::branch(4452, 1), Node::branch(4453, 1), Node::branch(4454, 1),
    Node::branch(4455, 1), Node::branch(4456, 1), Node::branch(4457, 1), Node::branch(4458, 3),
    Node::named(0, 0, 675), Node::named(0, 0, 676), Node::named(0, 0, 677), Node::named(0, 0, 678),
    Node::named(0, 0, 679), Node::branch(4461, 1), Node::branch(4462, 1), Node::branch(4463, 1),
    Node::named(0, 0, 680), Node::named(0, 0, 681), Node::named(0, 0, 682), Node::named(0, 0, 683),
    Node::named(0, 0, 684), Node::named(0, 0, 685), Node::named(0, 0, 686), Node::named(0, 0, 687),
    Node::named(0, 0, 688), Node::named(0, 0, 689), Node::named(0, 0, 690), Node::named(0, 0, 691),
    Node::named(0, 0, 692), Node::named(0, 0, 693), Node::named(0, 0, 694), Node::named(0, 0, 695),
    Node::named(0, 0, 696), Node::named(0, 0, 697), Node::branch(4464, 1), Node::named(0, 0, 698),
    Node::named(0, 0, 699), Node::named(0, 0, 700), Node::named(0, 0, 701), Node::named(0, 0, 702),
    Node::named(0, 0, 703), Node::named(0, 0, 704), Node::named(0, 0, 705), Node::branch(4465, 1),
    Node::branch(4466, 1), Node::branch(4467, 1), Node::named(0, 0, 706), Node::named(0, 0, 707),
    Node::named(0, 0, 708), Node::named(0, 0, 709), Node::named(0, 0, 710), Node::named(0, 0, 711),
    Node::named(0, 0, 712), Node::named(0, 0, 713), Node::named(0, 0, 714), Node::named(0, 0, 715),
    Node::branch(4468, 1), Node::named(0, 0, 618), Node::branch(4469, 1), Node::named(0, 0, 716),
    Node::named(0, 0, 717), Node::named(0, 0, 718), Node::branch(4470, 1), Node::branch(4471, 1),
    Node::named(0, 0, 719), Node::named(4472, 1, 720), Node::branch(4473, 1), Node::branch(4474, 1),
    Node::branch(4475, 1), Node::branch(4476, 1), Node::branch(4477, 1), Node::branch(4478, 1),
    Node::named(0, 0, 721), Node::named(0, 0, 630), Node::named(0, 0, 722), Node::branch(4479, 1),
    Node::branch(4480, 1), Node::named(0, 0, 723), Node::named(4481, 1, 724),
    Node::legacy(0, 0, 725), Node::branch(4482, 1), Node::branch(4483, 1),
    Node::named(4484, 1, 726), Node::branch(4485, 1), Node::branch(4486, 1), Node::branch(4487, 1),
    Node::branch(4488, 1), Node::branch(4489, 1), Node::named(4490, 1, 727),
    Node::named(4491, 1, 728), Node::named(4492, 1, 729), Node::branch(4493, 1),
    Node::branch(4494, 1), Node::branch(4495, 1), Node::branch(4496, 1), Node::branch(4497, 1),
    Node::branch(4498, 1), Node::named(0, 0, 730), Node::named(0, 0, 731), Node::named(0, 0, 732),
    Node::named(0, 0, 733), Node::named(0, 0, 734), Node::branch(4499, 1), Node::named(0, 0, 735),
    Node::named(0, 0, 736), Node::branch(4500, 1), Node::branch(4501, 1), Node::branch(4502, 1),
    Node::branch(4503, 1), Node::branch(4504, 1), Node::named(0, 0, 737), Node::branch(4505, 1),
    Node::branch(4506, 3), Node::branch(4509, 1), Node::branch(4510, 1), Node::named(0, 0, 738),
    Node::named(0, 0, 739), Node::branch(4511, 1), Node::named(0, 0, 740), Node::branch(4512, 1),
    Node::branch(4513, 1), Node::branch(4514, 1), Node::named(0, 0, 741), Node::branch(4515, 1),
    Node::named(0, 0, 742), Node::branch(4516, 1), Node::branch(4517, 1), Node::named(0, 0, 743),
    Node::branch(4518, 1), Node::named(0, 0, 744), Node::branch(4519, 1), Node::branch(4520, 1),
    Node::named(0, 0, 745), Node::named(0, 0, 746), Node::branch(4521, 1), Node::named(0, 0, 747),
    Node::branch(4522, 1), Node::named(0, 0, 748), Node::branch(4523, 1), Node::branch(4524, 1),
    Node::branch(4525, 1), Node::branch(4526, 1), Node::branch(4527, 1), Node::named(4528, 1, 749),
    Node::branch(4529, 1), Node::branch(4530, 1), Node::branch(4531, 1), Node::branch(4532, 1),
    Node::branch(4533, 1), Node::branch(4534, 1), Node::branch(4535, 1), Node::branch(4536, 1),
    Node::branch(4537, 1), Node::branch(4538, 1), Node::branch(4539, 1), Node::named(0, 0, 750),
    Node::named(0, 0, 751), Node::named(0, 0, 752), Node::named(0, 0, 753), Node::branch(4540, 1),
    Node::branch(4541, 1), Node::named(0, 0, 754), Node::branch(4542, 1), Node::branch(4543, 1),
    Node::branch(4544, 1), Node::legacy(0, 0, 755), Node::branch(4545, 1), Node::named(0, 0, 756),
    Node::branch(4546, 1), Node::branch(4547, 1), Node::branch(4548, 1), Node::branch(4549, 1),
    Node::named(0, 0, 757), Node::named(4550, 2, 758), Node::branch(4552, 2),
    Node::named(0, 0, 759), Node::branch(4554, 1), Node::named(0, 0, 760), Node::branch(4555, 1),
    Node::named(0, 0, 761), Node::branch(4556, 1), Node::branch(4557, 1), Node::named(0, 0, 410),
    Node::branch(4558, 1), Node::branch(4559, 1), Node::branch(4560, 1), Node::named(4561, 1, 762),
    Node::branch(4562, 1), Node::named(0, 0, 763), Node::named(0, 0, 764), Node::named(0, 0, 749),
    Node::named(0, 0, 765), Node::branch(4563, 1), Node::branch(4564, 1), Node::branch(4565, 1),
    Node::branch(4566, 1), Node::branch(4567, 1), Node::named(0, 0, 766), Node::branch(4568, 1),
    Node::named(0, 0, 767), Node::named(0, 0, 768), Node::named(0, 0, 769), Node::named(0, 0, 770),
    Node::branch(4569, 1), Node::named(0, 0, 771), Node::branch(4570, 1), Node::branch(4571, 6),
    Node::branch(4577, 2), Node::branch(4579, 3), Node::branch(4582, 1), Node::branch(4583, 2),
    Node::branch(4585, 1), Node::named(0, 0, 772), Node::named(0, 0, 773), Node::branch(4586, 1),
    Node::named(4587, 1, 774), Node::branch(4588, 1), Node::named(0, 0, 775), Node::branch(4589, 1),
    Node::named(0, 0, 776), Node::branch(4590, 1), Node::branch(4591, 1), Node::named(0, 0, 777),
    Node::branch(4592, 1), Node::named(0, 0, 161), Node::named(0, 0, 778), Node::named(0, 0, 779),
    Node::named(0, 0, 780), Node::named(0, 0, 781), Node::named(0, 0, 782), Node::named(0, 0, 783),
    Node::branch(4593, 1), Node::branch(4594, 1), Node::branch(4595, 1), Node::branch(4596, 1),
    Node::branch(4597, 1), Node::branch(4598, 2), Node::branch(4600, 1), Node::branch(4601, 1),
    Node::branch(4602, 1), Node::branch(4603, 1), Node::branch(4604, 1), Node::branch(4605, 1),
    Node::branch(4606, 1), Node::named(0, 0, 784), Node::named(0, 0, 785), Node::branch(4607, 1),
    Node::branch(4608, 1), Node::branch(4609, 1), Node::branch(4610, 1), Node::branch(4611, 1),
    Node::named(0, 0, 786), Node::branch(4612, 1), Node::branch(4613, 1), Node::branch(4614, 1),
    Node::branch(4615, 1), Node::branch(4616, 1), Node::branch(4617, 1), Node::branch(4618, 1),
    Node::branch(4619, 1), Node::branch(4620, 1), Node::legacy(0, 0, 787), Node::legacy(0, 0, 788),
    Node::branch(4621, 1), Node::branch(4622, 1), Node::named(0, 0, 571), Node::branch(4623, 1),
    Node::named(0, 0, 789), Node::named(0, 0, 790), Node::named(0, 0, 791), Node::named(0, 0, 4),
    Node::branch(4624, 1), Node::branch(4625, 1), Node::named(0, 0, 792), Node::named(0, 0, 793),
    Node::branch(4626, 1), Node::named(4627, 1, 794), Node::branch(4628, 1), Node::branch(4629, 1),
    Node::branch(4630, 1), Node::branch(4631, 1), Node::branch(4632, 1), Node::branch(4633, 1),
    Node::named(0, 0, 795), Node::named(0, 0, 796), Node::branch(4634, 1), Node::named(0, 0, 797),
    Node::branch(4635, 1), Node::named(4636, 1, 798), Node::named(0, 0, 28), Node::branch(4637, 1),
    Node::named(0, 0, 799), Node::named(0, 0, 800), Node::named(0, 0, 801), Node::branch(4638, 1),
    Node::named(0, 0, 802), Node::named(4639, 1, 803), Node::branch(4640, 1), Node::branch(4641, 1),
    Node::named(0, 0, 804), Node::branch(4642, 1), Node::named(0, 0, 805), Node::branch(4643, 1),
    Node::branch(4644, 1), Node::branch(4645, 1), Node::branch(4646, 1), Node::named(0, 0, 806),
    Node::branch(4647, 1), Node::legacy(0, 0, 807), Node::named(4648, 1, 808),
    Node::branch(4649, 1), Node::branch(4650, 1), Node::branch(4651, 1), Node::branch(4652, 1),
    Node::branch(4653, 1), Node::branch(4654, 1), Node::branch(4655, 1), Node::named(0, 0, 809),
    Node::named(0, 0, 810), Node::named(0, 0, 811), Node::branch(4656, 2), Node::named(0, 0, 812),
    Node::branch(4658, 1), Node::branch(4659, 1), Node::branch(4660, 1), Node::named(0, 0, 813),
    Node::named(4661, 1, 814), Node::branch(4662, 1), Node::branch(4663, 1), Node::branch(4664, 1),
    Node::branch(4665, 1), Node::branch(4666, 1), Node::branch(4667, 1), Node::branch(4668, 1),
    Node::branch(4669, 1), Node::named(0, 0, 815), Node::branch(4670, 1), Node::branch(4671, 1),
    Node::branch(4672, 1), Node::branch(4673, 1), Node::branch(4674, 1), Node::branch(4675, 1),
    Node::branch(4676, 1), Node::branch(4677, 1), Node::branch(4678, 1), Node::named(0, 0, 816),
    Node::named(4679, 1, 817), Node::named(0, 0, 818), Node::named(0, 0, 819),
    Node::branch(4680, 1), Node::branch(4681, 1), Node::named(0, 0, 820), Node::branch(4682, 1),
    Node::branch(4683, 1), Node::branch(4684, 1), Node::named(0, 0, 180), Node::named(0, 0, 821),
    Node::named(0, 0, 822), Node::named(0, 0, 823), Node::named(0, 0, 824), Node::branch(4685, 1),
    Node::branch(4686, 1), Node::branch(4687, 1), Node::branch(4688, 1), Node::named(0, 0, 825),
    Node::branch(4689, 1), Node::branch(4690, 1), Node::branch(4691, 1), Node::branch(4692, 1),
    Node::branch(4693, 1), Node::branch(4694, 1), Node::named(0, 0, 826), Node::branch(4695, 1),
    Node::named(4696, 1, 827), Node::named(0, 0, 828), Node::branch(4697, 1),
    Node::named(0, 0, 829), Node::named(0, 0, 830), Node::named(4698, 1, 831),
    Node::branch(4699, 1), Node::named(0, 0, 832), Node::named(0, 0, 833), Node::branch(4700, 1),
    Node::branch(4701, 1), Node::branch(4702, 1), Node::branch(4703, 1), Node::branch(4704, 1),
    Node::named(0, 0, 834), Node::named(0, 0, 835), Node::branch(4705, 1), Node::branch(4706, 1),
    Node::branch(4707, 1), Node::named(0, 0, 836), Node::branch(4708, 1), Node::branch(4709, 1),
    Node::branch(4710, 1), Node::branch(4711, 1), Node::named(0, 0, 837), Node::branch(4712, 1),
    Node::legacy(0, 0, 838), Node::branch(4713, 1), Node::branch(4714, 1), Node::branch(4715, 1),
    Node::named(4716, 2, 839), Node::branch(4718, 1), Node::branch(4719, 1), Node::branch(4720, 1),
    Node::branch(4721, 1), Node::named(0, 0, 840), Node::branch(4722, 2), Node::branch(4724, 1),
    Node::branch(4725, 1), Node::branch(4726, 1), Node::named(0, 0, 59), Node::branch(4727, 1),
    Node::named(0, 0, 841), Node::named(0, 0, 842), Node::branch(4728, 1),
    Node::named(4729, 1, 843), Node::named(4730, 1, 844), Node::branch(4731, 1),
    Node::branch(4732, 1), Node::named(4733, 1, 845), Node::named(0, 0, 846),
    Node::named(0, 0, 847), Node::branch(4734, 1), Node::named(4735, 1, 848),
    Node::named(0, 0, 849), Node::branch(4736, 1), Node::branch(4737, 1), Node::named(0, 0, 850),
    Node::branch(4738, 1), Node::named(0, 0, 196), Node::branch(4739, 1), Node::named(0, 0, 851),
    Node::named(0, 0, 852), Node::named(0, 0, 853), Node::named(0, 0, 854), Node::named(0, 0, 855),
    Node::named(0, 0, 856), Node::branch(4740, 2), Node::named(0, 0, 200), Node::branch(4742, 1),
    Node::named(0, 0, 202), Node::named(0, 0, 857), Node::named(4743, 1, 858),
    Node::named(4744, 3, 859), Node::named(4747, 1, 860), Node::branch(4748, 1),
    Node::branch(4749, 1), Node::named(0, 0, 861), Node::branch(4750, 1), Node::branch(4751, 1),
    Node::named(4752, 1, 204), Node::named(0, 0, 862), Node::named(4753, 2, 863),
    Node::branch(4755, 1), Node::named(4756, 1, 864), Node::branch(4757, 1), Node::branch(4758, 1),
    Node::named(4759, 1, 865), Node::named(0, 0, 485), Node::named(0, 0, 487),
    Node::branch(4760, 2), Node::named(0, 0, 866), Node::named(0, 0, 867), Node::branch(4762, 1),
    Node::named(4763, 1, 205), Node::named(0, 0, 868), Node::named(0, 0, 869),
    Node::branch(4764, 1), Node::branch(4765, 1), Node::branch(4766, 1), Node::branch(4767, 1),
    Node::named(0, 0, 870), Node::branch(4768, 1), Node::branch(4769, 1), Node::branch(4770, 1),
    Node::branch(4771, 1), Node::branch(4772, 1), Node::branch(4773, 1), Node::branch(4774, 1),
    Node::branch(4775, 1), Node::named(0, 0, 871), Node::named(0, 0, 872), Node::branch(4776, 1),
    Node::named(4777, 1, 873), Node::branch(4778, 1), Node::branch(4779, 1),
    Node::legacy(0, 0, 874), Node::named(0, 0, 875), Node::branch(4780, 1), Node::branch(4781, 1),
    Node::named(0, 0, 876), Node::named(0, 0, 877), Node::branch(4782, 1), Node::named(0, 0, 878),
    Node::named(0, 0, 879), Node::named(0, 0, 880), Node::branch(4783, 1), Node::named(0, 0, 881),
    Node::named(0, 0, 882), Node::named(0, 0, 883), Node::branch(4784, 1), Node::branch(4785, 1),
    Node::named(0, 0, 884), Node::named(0, 0, 885), Node::named(0, 0, 886),
    Node::named(4786, 1, 513), Node::branch(4787, 1), Node::branch(4788, 1), Node::branch(4789, 1),
    Node::branch(4790, 1), Node::branch(4791, 1), Node::named(0, 0, 887), Node::branch(4792, 1),
    Node::branch(4793, 1), Node::named(0, 0, 888), Node::branch(4794, 1), Node::branch(4795, 1),
    Node::branch(4796, 1), Node::branch(4797, 1), Node::branch(4798, 1), Node::named(0, 0, 889),
    Node::branch(4799, 1), Node::branch(4800, 1), Node::branch(4801, 1), Node::branch(4802, 1),
    Node::named(0, 0, 890), Node::branch(4803, 1), Node::branch(4804, 2), Node::named(0, 0, 891),
    Node::branch(4806, 1), Node::branch(4807, 1), Node::branch(4808, 1), Node::branch(4809, 1),
    Node::legacy(0, 0, 892), Node::named(0, 0, 893), Node::branch(4810, 1), Node::branch(4811, 1),
    Node::branch(4812, 1), Node::branch(4813, 3), Node::branch(4816, 1), Node::named(4817, 1, 894),
    Node::named(0, 0, 895), Node::branch(4818, 1), Node::branch(4819, 1), Node::branch(4820, 1),
    Node::branch(4821, 1), Node::branch(4822, 1), Node::named(0, 0, 896), Node::branch(4823, 1),
    Node::branch(4824, 1), Node::branch(4825, 1), Node::branch(4826, 1), Node::branch(4827, 1),
    Node::named(4828, 1, 897), Node::named(0, 0, 898), Node::branch(4829, 1),
    Node::named(0, 0, 899), Node::branch(4830, 1), Node::named(0, 0, 322), Node::branch(4831, 1),
    Node::named(0, 0, 900), Node::named(0, 0, 901), Node::branch(4832, 1), Node::legacy(0, 0, 902),
    Node::branch(4833, 1), Node::named(4834, 1, 903), Node::named(0, 0, 904), Node::branch(4835, 1),
    Node::branch(4836, 1), Node::branch(4837, 1), Node::branch(4838, 1), Node::branch(4839, 1),
    Node::branch(4840, 1), Node::named(0, 0, 905), Node::branch(4841, 1), Node::named(4842, 1, 906),
    Node::named(0, 0, 907), Node::named(0, 0, 908), Node::branch(4843, 2), Node::named(0, 0, 909),
    Node::branch(4845, 1), Node::branch(4846, 1), Node::branch(4847, 1), Node::named(0, 0, 910),
    Node::branch(4848, 1), Node::named(4849, 1, 911), Node::branch(4850, 1), Node::branch(4851, 1),
    Node::named(0, 0, 318), Node::branch(4852, 1), Node::branch(4853, 1), Node::named(0, 0, 912),
    Node::named(4854, 1, 913), Node::branch(4855, 6), Node::branch(4861, 1), Node::named(0, 0, 914),
    Node::named(0, 0, 915), Node::branch(4862, 1), Node::named(0, 0, 916), Node::named(0, 0, 917),
    Node::named(0, 0, 918), Node::named(0, 0, 919), Node::named(0, 0, 920), Node::branch(4863, 1),
    Node::branch(4864, 1), Node::branch(4865, 1), Node::branch(4866, 1), Node::named(0, 0, 921),
    Node::branch(4867, 1), Node::named(4868, 1, 922), Node::branch(4869, 1), Node::branch(4870, 1),
    Node::named(0, 0, 923), Node::named(0, 0, 924), Node::branch(4871, 1), Node::branch(4872, 1),
    Node::branch(4873, 1), Node::named(0, 0, 925), Node::branch(4874, 1), Node::named(0, 0, 926),
    Node::branch(4875, 1), Node::named(0, 0, 927), Node::named(0, 0, 928), Node::branch(4876, 1),
    Node::branch(4877, 1), Node::named(0, 0, 929), Node::named(0, 0, 930), Node::named(0, 0, 931),
    Node::named(0, 0, 932), Node::branch(4878, 1), Node::named(4879, 1, 933), Node::branch(4880, 1),
    Node::branch(4881, 1), Node::named(0, 0, 934), Node::branch(4882, 1), Node::named(0, 0, 935),
    Node::branch(4883, 1), Node::branch(4884, 2), Node::named(4886, 2, 936), Node::branch(4888, 1),
    Node::named(0, 0, 552), Node::named(0, 0, 937), Node::named(0, 0, 938), Node::named(0, 0, 939),
    Node::branch(4889, 1), Node::branch(4890, 1), Node::named(0, 0, 449), Node::branch(4891, 1),
    Node::branch(4892, 1), Node::branch(4893, 1), Node::named(0, 0, 940), Node::named(0, 0, 941),
    Node::branch(4894, 1), Node::branch(4895, 1), Node::branch(4896, 1), Node::named(4897, 1, 942),
    Node::named(4898, 1, 943), Node::named(4899, 2, 944), Node::named(4901, 2, 945),
    Node::branch(4903, 2), Node::named(0, 0, 533), Node::branch(4905, 1), Node::branch(4906, 1),
    Node::branch(4907, 1), Node::named(0, 0, 946), Node::branch(4908, 1), Node::named(0, 0, 466),
    Node::branch(4909, 1), Node::branch(4910, 1), Node::branch(4911, 1), Node::named(0, 0, 947),
    Node::named(0, 0, 948), Node::branch(4912, 1), Node::branch(4913, 1), Node::branch(4914, 1),
    Node::branch(4915, 1), Node::branch(4916, 2), Node::branch(4918, 1), Node::branch(4919, 1),
    Node::branch(4920, 1), Node::branch(4921, 3), Node::branch(4924, 1), Node::branch(4925, 1),
    Node::branch(4926, 1), Node::branch(4927, 1), Node::branch(4928, 2), Node::branch(4930, 1),
    Node::branch(4931, 1), Node::named(0, 0, 949), Node::named(0, 0, 950), Node::branch(4932, 1),
    Node::branch(4933, 1), Node::branch(4934, 1), Node::branch(4935, 2), Node::named(0, 0, 951),
    Node::branch(4937, 1), Node::named(4938, 1, 952), Node::branch(4939, 1),
    Node::legacy(0, 0, 953), Node::branch(4940, 1), Node::branch(4941, 1), Node::branch(4942, 1),
    Node::branch(4943, 1), Node::branch(4944, 2), Node::named(4946, 2, 954), Node::branch(4948, 2),
    Node::branch(4950, 1), Node::named(0, 0, 18), Node::branch(4951, 1), Node::legacy(0, 0, 955),
    Node::named(0, 0, 956), Node::legacy(4952, 2, 957), Node::branch(4954, 1),
    Node::branch(4955, 1), Node::branch(4956, 1), Node::branch(4957, 1), Node::named(0, 0, 648),
    Node::branch(4958, 1), Node::branch(4959, 1), Node::branch(4960, 1), Node::branch(4961, 1),
    Node::named(0, 0, 958), Node::branch(4962, 1), Node::branch(4963, 1), Node::named(0, 0, 959),
    Node::branch(4964, 1), Node::named(0, 0, 960), Node::branch(4965, 1), Node::branch(4966, 1),
    Node::named(0, 0, 961), Node::branch(4967, 1), Node::legacy(0, 0, 962), Node::named(0, 0, 963),
    Node::branch(4968, 1), Node::named(0, 0, 964), Node::branch(4969, 1), Node::branch(4970, 1),
    Node::named(0, 0, 965), Node::named(0, 0, 966), Node::named(0, 0, 967), Node::branch(4971, 1),
    Node::branch(4972, 1), Node::named(0, 0, 968), Node::named(0, 0, 969), Node::named(0, 0, 970),
    Node::branch(4973, 1), Node::branch(4974, 1), Node::branch(4975, 1), Node::named(0, 0, 971),
    Node::named(0, 0, 330), Node::branch(4976, 1), Node::branch(4977, 1), Node::branch(4978, 1),
    Node::branch(4979, 1), Node::named(0, 0, 972), Node::named(0, 0, 973), Node::named(0, 0, 974),
    Node::branch(4980, 1), Node::named(0, 0, 975), Node::named(0, 0, 976), Node::branch(4981, 1),
    Node::named(0, 0, 977), Node::named(0, 0, 978), Node::branch(4982, 1), Node::branch(4983, 1),
    Node::branch(4984, 1), Node::branch(4985, 1), Node::branch(4986, 1), Node::named(0, 0, 218),
    Node::branch(4987, 1), Node::branch(4988, 1), Node::branch(4989, 1), Node::branch(4990, 2),
    Node::branch(4992, 1), Node::branch(4993, 1), Node::named(0, 0, 979), Node::branch(4994, 1),
    Node::named(0, 0, 980), Node::branch(4995, 1), Node::branch(4996, 1), Node::named(0, 0, 981),
    Node::named(0, 0, 982), Node::named(0, 0, 983), Node::named(0, 0, 524), Node::named(0, 0, 984),
    Node::branch(4997, 2), Node::branch(4999, 2), Node::branch(5001, 1), Node::named(0, 0, 985),
    Node::branch(5002, 1), Node::named(5003, 1, 123), Node::branch(5004, 1), Node::branch(5005, 1),
    Node::named(0, 0, 986), Node::named(0, 0, 987), Node::named(0, 0, 988), Node::named(0, 0, 989),
    Node::named(0, 0, 990), Node::named(0, 0, 991), Node::named(0, 0, 992), Node::branch(5006, 1),
    Node::branch(5007, 1), Node::named(0, 0, 993), Node::named(0, 0, 994), Node::branch(5008, 1),
    Node::branch(5009, 1), Node::named(0, 0, 995), Node::branch(5010, 1), Node::branch(5011, 1),
    Node::named(0, 0, 996), Node::branch(5012, 1), Node::branch(5013, 1), Node::branch(5014, 1),
    Node::branch(5015, 1), Node::legacy(0, 0, 997), Node::named(0, 0, 998), Node::legacy(0, 0, 999),
    Node::branch(5016, 1), Node::named(0, 0, 1000), Node::legacy(0, 0, 1001), Node::branch(5017, 1),
    Node::named(0, 0, 1002), Node::branch(5018, 1), Node::branch(5019, 1), Node::named(0, 0, 374),
    Node::named(0, 0, 1003), Node::branch(5020, 1), Node::branch(5021, 1), Node::named(0, 0, 1004),
    Node::legacy(0, 0, 1005), Node::branch(5022, 1), Node::branch(5023, 1), Node::branch(5024, 1),
    Node::branch(5025, 4), Node::branch(5029, 1), Node::branch(5030, 1), Node::named(0, 0, 1006),
    Node::branch(5031, 1), Node::named(0, 0, 1007), Node::branch(5032, 1), Node::branch(5033, 1),
    Node::branch(5034, 1), Node::named(0, 0, 1008), Node::branch(5035, 1), Node::named(0, 0, 1009),
    Node::named(0, 0, 1010), Node::branch(5036, 1), Node::branch(5037, 1), Node::branch(5038, 1),
    Node::named(0, 0, 1011), Node::branch(5039, 1), Node::branch(5040, 6), Node::branch(5046, 1),
    Node::branch(5047, 1), Node::branch(5048, 1), Node::branch(5049, 1), Node::branch(5050, 1),
    Node::branch(5051, 1), Node::named(0, 0, 1012), Node::legacy(0, 0, 1013),
    Node::named(0, 0, 1014), Node::legacy(0, 0, 1015), Node::branch(5052, 1), Node::branch(5053, 1),
    Node::branch(5054, 1), Node::branch(5055, 1), Node::branch(5056, 1), Node::branch(5057, 1),
    Node::named(0, 0, 765), Node::branch(5058, 1), Node::branch(5059, 2), Node::named(0, 0, 1016),
    Node::branch(5061, 1), Node::named(0, 0, 1017), Node::named(0, 0, 1018),
    Node::named(0, 0, 1019), Node::branch(5062, 1), Node::named(0, 0, 1020), Node::branch(5063, 1),
    Node::branch(5064, 1), Node::named(0, 0, 1021), Node::branch(5065, 1), Node::branch(5066, 1),
    Node::legacy(0, 0, 1022), Node::legacy(0, 0, 1023), Node::branch(5067, 1),
    Node::branch(5068, 1), Node::branch(5069, 1), Node::branch(5070, 1), Node::branch(5071, 1),
    Node::named(0, 0, 1024), Node::named(0, 0, 1025), Node::named(0, 0, 1026),
    Node::named(0, 0, 1027), Node::named(0, 0, 1028), Node::branch(5072, 1),
    Node::named(0, 0, 1029), Node::named(0, 0, 1030), Node::branch(5073, 1), Node::branch(5074, 1),
    Node::branch(5075, 1), Node::branch(5076, 2), Node::branch(5078, 1), Node::branch(5079, 1),
    Node::branch(5080, 1), Node::branch(5081, 1), Node::branch(5082, 3), Node::branch(5085, 1),
    Node::branch(5086, 1), Node::branch(5087, 1), Node::branch(5088, 1), Node::branch(5089, 1),
    Node::branch(5090, 1), Node::branch(5091, 1), Node::branch(5092, 1), Node::branch(5093, 1),
    Node::branch(5094, 1), Node::named(0, 0, 1031), Node::branch(5095, 1), Node::branch(5096, 1),
    Node::branch(5097, 1), Node::branch(5098, 1), Node::branch(5099, 1), Node::branch(5100, 1),
    Node::named(0, 0, 1032), Node::branch(5101, 1), Node::branch(5102, 1), Node::branch(5103, 1),
    Node::named(0, 0, 1033), Node::named(0, 0, 1034), Node::named(0, 0, 1035),
    Node::branch(5104, 1), Node::branch(5105, 2), Node::branch(5107, 1), Node::branch(5108, 1),
    Node::branch(5109, 1), Node::branch(5110, 1), Node::branch(5111, 1), Node::branch(5112, 1),
    Node::branch(5113, 1), Node::branch(5114, 1), Node::branch(5115, 1), Node::branch(5116, 1),
    Node::branch(5117, 1), Node::branch(5118, 1), Node::branch(5119, 1), Node::branch(5120, 1),
    Node::branch(5121, 1), Node::branch(5122, 1), Node::branch(5123, 1), Node::branch(5124, 1),
    Node::branch(5125, 1), Node::branch(5126, 1), Node::branch(5127, 1), Node::branch(5128, 1),
    Node::branch(5129, 1), Node::legacy(0, 0, 1036), Node::legacy(0, 0, 1037),
    Node::named(0, 0, 1038), Node::legacy(0, 0, 1039), Node::branch(5130, 1), Node::branch(5131, 1),
    Node::legacy(0, 0, 1040), Node::legacy(0, 0, 1041), Node::named(0, 0, 1042),
    Node::branch(5132, 1), Node::branch(5133, 1), Node::branch(5134, 1), Node::branch(5135, 1),
    Node::branch(5136, 1), Node::branch(5137, 1), Node::branch(5138, 1), Node::branch(5139, 1),
    Node::branch(5140, 1), Node::named(0, 0, 1043), Node::named(0, 0, 1044),
    Node::named(0, 0, 1045), Node::named(0, 0, 1046), Node::branch(5141, 1), Node::branch(5142, 2),
    Node::branch(5144, 1), Node::branch(5145, 1), Node::branch(5146, 1), Node::branch(5147, 2),
    Node::branch(5149, 1), Node::branch(5150, 1), Node::branch(5151, 1), Node::branch(5152, 1),
    Node::branch(5153, 1), Node::branch(5154, 1), Node::named(0, 0, 1047), Node::named(0, 0, 1048),
    Node::named(0, 0, 1049), Node::named(0, 0, 1050), Node::named(0, 0, 1051),
    Node::branch(5155, 1), Node::branch(5156, 1), Node::branch(5157, 1), Node::branch(5158, 1),
    Node::branch(5159, 1), Node::named(5160, 3, 235), Node::named(5163, 1, 101),
    Node::branch(5164, 1), Node::branch(5165, 1), Node::branch(5166, 1), Node::named(0, 0, 103),
    Node::named(0, 0, 1052), Node::named(0, 0, 1053), Node::branch(5167, 1), Node::branch(5168, 1),
    Node::branch(5169, 1), Node::branch(5170, 1), Node::branch(5171, 1), Node::branch(5172, 1),
    Node::branch(5173, 1), Node::named(0, 0, 1054), Node::legacy(0, 0, 1055), Node::branch(5174, 1),
    Node::named(0, 0, 1056), Node::named(0, 0, 1057), Node::legacy(0, 0, 1058),
    Node::branch(5175, 2), Node::branch(5177, 1), Node::branch(5178, 1), Node::branch(5179, 1),
    Node::branch(5180, 1), Node::branch(5181, 1), Node::branch(5182, 1), Node::branch(5183, 1),
    Node::branch(5184, 1), Node::branch(5185, 1), Node::branch(5186, 1), Node::branch(5187, 1),
    Node::named(0, 0, 1059), Node::named(0, 0, 1060), Node::named(0, 0, 334), Node::branch(5188, 1),
    Node::branch(5189, 1), Node::named(0, 0, 1061), Node::legacy(0, 0, 1062),
    Node::named(0, 0, 1063), Node::named(0, 0, 1064), Node::branch(5190, 1),
    Node::legacy(0, 0, 1065), Node::named(0, 0, 1066), Node::legacy(0, 0, 1067),
    Node::branch(5191, 1), Node::named(0, 0, 1068), Node::branch(5192, 1),
    Node::named(5193, 1, 1069), Node::branch(5194, 1), Node::named(0, 0, 1070),
    Node::branch(5195, 1), Node::named(0, 0, 1071), Node::named(5196, 1, 18), Node::branch(5197, 1),
    Node::legacy(0, 0, 1072), Node::branch(5198, 1), Node::branch(5199, 1), Node::branch(5200, 1),
    Node::branch(5201, 1), Node::branch(5202, 1), Node::named(0, 0, 1073),
    Node::named(5203, 1, 1074), Node::branch(5204, 1), Node::named(5205, 1, 1075),
    Node::branch(5206, 1), Node::named(0, 0, 260), Node::branch(5207, 1), Node::named(0, 0, 594),
    Node::branch(5208, 1), Node::named(0, 0, 595), Node::branch(5209, 1), Node::branch(5210, 1),
    Node::branch(5211, 1), Node::branch(5212, 1), Node::branch(5213, 1), Node::branch(5214, 1),
    Node::branch(5215, 1), Node::named(0, 0, 111), Node::branch(5216, 1), Node::named(0, 0, 907),
    Node::branch(5217, 1), Node::branch(5218, 1), Node::branch(5219, 1), Node::branch(5220, 1),
    Node::named(0, 0, 131), Node::named(0, 0, 1076), Node::named(0, 0, 1077), Node::branch(5221, 1),
    Node::branch(5222, 1), Node::branch(5223, 1), Node::named(0, 0, 1078), Node::legacy(0, 0, 1079),
    Node::branch(5224, 1), Node::named(0, 0, 373), Node::named(0, 0, 720), Node::named(0, 0, 1080),
    Node::named(0, 0, 1081), Node::branch(5225, 1), Node::named(0, 0, 1082),
    Node::named(0, 0, 1083), Node::named(0, 0, 1084), Node::named(0, 0, 1085),
    Node::legacy(0, 0, 1086), Node::branch(5226, 1), Node::branch(5227, 1), Node::branch(5228, 1),
    Node::branch(5229, 1), Node::named(0, 0, 381), Node::branch(5230, 2), Node::branch(5232, 1),
    Node::named(0, 0, 1087), Node::branch(5233, 1), Node::branch(5234, 1),
    Node::named(5235, 1, 1000), Node::named(0, 0, 1088), Node::named(0, 0, 1089),
    Node::branch(5236, 2), Node::branch(5238, 1), Node::named(0, 0, 506), Node::named(0, 0, 1090),
    Node::named(0, 0, 1091), Node::branch(5239, 2), Node::named(5241, 1, 1092),
    Node::branch(5242, 1), Node::named(0, 0, 1093), Node::named(0, 0, 1094),
    Node::named(0, 0, 1095), Node::named(5243, 1, 1096), Node::branch(5244, 1),
    Node::branch(5245, 1), Node::branch(5246, 1), Node::legacy(0, 0, 1097), Node::branch(5247, 1),
    Node::branch(5248, 1), Node::named(0, 0, 1098), Node::named(0, 0, 1099),
    Node::named(0, 0, 1100), Node::branch(5249, 1), Node::named(0, 0, 1101), Node::branch(5250, 1),
    Node::branch(5251, 1), Node::branch(5252, 1), Node::named(0, 0, 1102), Node::branch(5253, 1),
    Node::branch(5254, 1), Node::legacy(5255, 1, 140), Node::named(0, 0, 1103),
    Node::named(0, 0, 1104), Node::named(0, 0, 1105), Node::named(0, 0, 1106),
    Node::branch(5256, 1), Node::branch(5257, 1), Node::branch(5258, 1), Node::branch(5259, 1),
    Node::branch(5260, 1), Node::branch(5261, 1), Node::branch(5262, 1), Node::branch(5263, 1),
    Node::branch(5264, 1), Node::named(0, 0, 1107), Node::named(0, 0, 1108),
    Node::named(0, 0, 1109), Node::branch(5265, 1), Node::branch(5266, 1), Node::legacy(0, 0, 1110),
    Node::named(0, 0, 1111), Node::named(0, 0, 1112), Node::named(0, 0, 1113),
    Node::legacy(0, 0, 1114), Node::named(0, 0, 1115), Node::branch(5267, 1),
    Node::named(0, 0, 1116), Node::branch(5268, 1), Node::named(0, 0, 758), Node::named(0, 0, 1117),
    Node::named(0, 0, 1118), Node::named(0, 0, 1119), Node::branch(5269, 1), Node::named(0, 0, 402),
    Node::branch(5270, 1), Node::branch(5271, 1), Node::named(0, 0, 1120), Node::named(0, 0, 1121),
    Node::branch(5272, 1), Node::branch(5273, 1), Node::branch(5274, 1), Node::branch(5275, 1),
    Node::branch(5276, 1), Node::named(0, 0, 1122), Node::named(0, 0, 1123),
    Node::named(0, 0, 1124), Node::named(0, 0, 1016), Node::branch(5277, 1),
    Node::legacy(0, 0, 428), Node::named(0, 0, 1125), Node::legacy(0, 0, 1126),
    Node::named(0, 0, 1127), Node::named(0, 0, 1128), Node::named(0, 0, 1129),
    Node::named(0, 0, 1130), Node::named(0, 0, 1131), Node::legacy(0, 0, 1132),
    Node::named(0, 0, 1133), Node::named(0, 0, 1134), Node::named(0, 0, 1135),
    Node::named(0, 0, 1136), Node::named(0, 0, 1137), Node::named(0, 0, 1138),
    Node::named(0, 0, 1139), Node::named(0, 0, 1140), Node::named(0, 0, 1141),
    Node::branch(5278, 1), Node::named(5279, 1, 1142), Node::named(0, 0, 1143),
    Node::branch(5280, 1), Node::named(0, 0, 1144), Node::branch(5281, 1), Node::branch(5282, 1),
    Node::named(0, 0, 1145), Node::named(0, 0, 783), Node::branch(5283, 1), Node::branch(5284, 1),
    Node::branch(5285, 1), Node::named(0, 0, 425), Node::branch(5286, 1), Node::named(0, 0, 1146),
    Node::named(0, 0, 284), Node::named(0, 0, 1147), Node::branch(5287, 1),
    Node::named(5288, 1, 1148), Node::named(0, 0, 470), Node::named(0, 0, 1149),
    Node::branch(5289, 1), Node::branch(5290, 1), Node::named(0, 0, 1150), Node::branch(5291, 1),
    Node::branch(5292, 1), Node::named(0, 0, 1151), Node::named(0, 0, 430), Node::named(0, 0, 1152),
    Node::named(0, 0, 1153), Node::named(0, 0, 392), Node::legacy(0, 0, 1154),
    Node::legacy(0, 0, 1155), Node::named(0, 0, 526), Node::named(0, 0, 1156),
    Node::branch(5293, 1), Node::branch(5294, 1), Node::named(0, 0, 1157), Node::branch(5295, 1),
    Node::named(0, 0, 792), Node::named(0, 0, 1158), Node::branch(5296, 1), Node::branch(5297, 1),
    Node::branch(5298, 1), Node::branch(5299, 1), Node::legacy(0, 0, 1159), Node::branch(5300, 1),
    Node::named(0, 0, 1160), Node::named(0, 0, 1161), Node::named(0, 0, 1162),
    Node::named(0, 0, 1163), Node::named(0, 0, 1164), Node::named(0, 0, 1165),
    Node::named(0, 0, 1166), Node::named(0, 0, 1167), Node::branch(5301, 1), Node::named(0, 0, 302),
    Node::named(0, 0, 1168), Node::named(0, 0, 448), Node::branch(5302, 1), Node::named(0, 0, 1169),
    Node::named(0, 0, 1170), Node::named(0, 0, 1171), Node::named(0, 0, 1172),
    Node::branch(5303, 1), Node::named(0, 0, 1173), Node::named(0, 0, 1174), Node::named(0, 0, 451),
    Node::named(0, 0, 462), Node::branch(5304, 2), Node::named(0, 0, 1175), Node::named(0, 0, 1176),
    Node::named(0, 0, 673), Node::branch(5306, 1), Node::branch(5307, 1), Node::branch(5308, 1),
    Node::branch(5309, 1), Node::branch(5310, 1), Node::branch(5311, 1), Node::branch(5312, 1),
    Node::branch(5313, 1), Node::named(5314, 1, 1177), Node::named(0, 0, 1178),
    Node::branch(5315, 1), Node::branch(5316, 1), Node::branch(5317, 2), Node::branch(5319, 1),
    Node::branch(5320, 1), Node::named(0, 0, 1179), Node::named(0, 0, 1180),
    Node::named(0, 0, 1181), Node::branch(5321, 1), Node::named(0, 0, 1182),
    Node::named(0, 0, 1183), Node::named(5322, 1, 1184), Node::branch(5323, 1),
    Node::branch(5324, 1), Node::branch(5325, 1), Node::branch(5326, 1), Node::branch(5327, 1),
    Node::named(0, 0, 1185), Node::branch(5328, 1), Node::named(0, 0, 1186),
    Node::named(0, 0, 1187), Node::branch(5329, 1), Node::named(0, 0, 1188), Node::branch(5330, 1),
    Node::named(0, 0, 1189), Node::named(0, 0, 1190), Node::named(0, 0, 925),
    Node::named(0, 0, 1191), Node::named(0, 0, 1192), Node::named(0, 0, 1193),
    Node::named(0, 0, 1194), Node::branch(5331, 1), Node::named(0, 0, 1195), Node::branch(5332, 1),
    Node::branch(5333, 1), Node::branch(5334, 1), Node::branch(5335, 1), Node::named(5336, 3, 184),
    Node::named(0, 0, 1196), Node::named(0, 0, 1197), Node::branch(5339, 1), Node::named(0, 0, 127),
    Node::named(0, 0, 1198), Node::legacy(0, 0, 1199), Node::named(0, 0, 1200),
    Node::named(5340, 1, 1201), Node::named(0, 0, 33), Node::named(0, 0, 1202),
    Node::named(0, 0, 16), Node::branch(5341, 1), Node::branch(5342, 1), Node::branch(5343, 1),
    Node::branch(5344, 1), Node::named(0, 0, 1203), Node::named(0, 0, 1204),
    Node::named(0, 0, 1205), Node::branch(5345, 1), Node::branch(5346, 1), Node::named(0, 0, 1206),
    Node::named(0, 0, 1207), Node::named(0, 0, 1208), Node::branch(5347, 1),
    Node::named(0, 0, 1209), Node::branch(5348, 1), Node::named(0, 0, 1210), Node::named(0, 0, 572),
    Node::named(5349, 1, 1211), Node::branch(5350, 1), Node::branch(5351, 1), Node::branch(5352, 1),
    Node::branch(5353, 1), Node::named(0, 0, 1212), Node::named(0, 0, 1213), Node::branch(5354, 1),
    Node::branch(5355, 3), Node::branch(5358, 3), Node::branch(5361, 1), Node::named(0, 0, 1214),
    Node::branch(5362, 1), Node::named(0, 0, 1215), Node::branch(5363, 1), Node::named(0, 0, 1216),
    Node::named(0, 0, 1217), Node::branch(5364, 1), Node::named(0, 0, 1218),
    Node::named(0, 0, 1219), Node::branch(5365, 2), Node::named(0, 0, 865), Node::branch(5367, 1),
    Node::branch(5368, 1), Node::branch(5369, 1), Node::branch(5370, 1), Node::branch(5371, 1),
    Node::legacy(0, 0, 1220), Node::branch(5372, 1), Node::named(0, 0, 1221),
    Node::named(0, 0, 1222), Node::named(0, 0, 1223), Node::named(0, 0, 1224),
    Node::branch(5373, 1), Node::named(0, 0, 1225), Node::branch(5374, 1), Node::named(0, 0, 1226),
    Node::branch(5375, 1), Node::named(0, 0, 1227), Node::branch(5376, 1), Node::named(0, 0, 1228),
    Node::legacy(0, 0, 1229), Node::named(0, 0, 1230), Node::named(0, 0, 1231),
    Node::legacy(0, 0, 1232), Node::branch(5377, 1), Node::branch(5378, 1), Node::named(0, 0, 1233),
    Node::branch(5379, 1), Node::named(0, 0, 1234), Node::branch(5380, 1), Node::legacy(0, 0, 1235),
    Node::legacy(0, 0, 1236), Node::named(5381, 1, 1237), Node::branch(5382, 1),
    Node::named(0, 0, 1238), Node::named(0, 0, 1239), Node::named(0, 0, 1240),
    Node::named(0, 0, 1241), Node::branch(5383, 1), Node::named(0, 0, 304), Node::branch(5384, 1),
    Node::named(5385, 1, 430), Node::named(0, 0, 430), Node::branch(5386, 1), Node::branch(5387, 1),
    Node::named(0, 0, 1242), Node::named(0, 0, 1243), Node::legacy(0, 0, 41), Node::branch(5388, 1),
    Node::branch(5389, 1), Node::branch(5390, 1), Node::branch(5391, 1), Node::branch(5392, 1),
    Node::named(0, 0, 220), Node::branch(5393, 1), Node::branch(5394, 1), Node::branch(5395, 1),
    Node::branch(5396, 1), Node::named(0, 0, 311), Node::named(0, 0, 1244), Node::branch(5397, 1),
    Node::branch(5398, 1), Node::branch(5399, 1), Node::named(0, 0, 524), Node::named(0, 0, 1245),
    Node::named(0, 0, 1246), Node::named(0, 0, 1247), Node::branch(5400, 1), Node::branch(5401, 1),
    Node::branch(5402, 1), Node::named(0, 0, 1248), Node::named(0, 0, 1249), Node::branch(5403, 1),
    Node::named(0, 0, 532), Node::named(0, 0, 1250), Node::branch(5404, 1), Node::named(0, 0, 1251),
    Node::named(0, 0, 1252), Node::named(0, 0, 1253), Node::named(0, 0, 1254),
    Node::branch(5405, 1), Node::named(0, 0, 1255), Node::named(0, 0, 1256), Node::branch(5406, 1),
    Node::named(0, 0, 534), Node::named(0, 0, 543), Node::branch(5407, 2), Node::named(0, 0, 1257),
    Node::named(0, 0, 1258), Node::branch(5409, 1), Node::named(0, 0, 911), Node::branch(5410, 1),
    Node::branch(5411, 1), Node::named(0, 0, 1259), Node::named(0, 0, 1260),
    Node::named(0, 0, 1261), Node::branch(5412, 1), Node::branch(5413, 1), Node::branch(5414, 1),
    Node::branch(5415, 1), Node::branch(5416, 1), Node::branch(5417, 1), Node::branch(5418, 1),
    Node::named(5419, 1, 1262), Node::named(0, 0, 1263), Node::branch(5420, 1),
    Node::named(0, 0, 1264), Node::branch(5421, 1), Node::named(0, 0, 1265), Node::named(0, 0, 922),
    Node::named(0, 0, 1266), Node::named(0, 0, 1267), Node::branch(5422, 1), Node::branch(5423, 1),
    Node::named(0, 0, 1268), Node::named(0, 0, 1269), Node::named(0, 0, 1270),
    Node::named(0, 0, 1271), Node::branch(5424, 1), Node::named(0, 0, 1272), Node::branch(5425, 1),
    Node::named(0, 0, 574), Node::branch(5426, 1), Node::named(0, 0, 773), Node::named(0, 0, 1273),
    Node::branch(5427, 1), Node::branch(5428, 1), Node::named(0, 0, 1274), Node::named(0, 0, 1274),
    Node::named(0, 0, 1275), Node::branch(5429, 1), Node::branch(5430, 1), Node::branch(5431, 1),
    Node::named(0, 0, 1276), Node::branch(5432, 1), Node::named(0, 0, 1277),
    Node::named(0, 0, 1278), Node::named(5433, 1, 1279), Node::named(0, 0, 1280),
    Node::named(0, 0, 1281), Node::named(0, 0, 1282), Node::branch(5434, 1),
    Node::named(0, 0, 1283), Node::branch(5435, 1), Node::named(0, 0, 235), Node::named(0, 0, 558),
    Node::named(0, 0, 934), Node::named(0, 0, 940), Node::named(0, 0, 324), Node::branch(5436, 1),
    Node::named(0, 0, 1284), Node::branch(5437, 1), Node::branch(5438, 1), Node::branch(5439, 1),
    Node::branch(5440, 1), Node::named(5441, 2, 236), Node::named(0, 0, 1285),
    Node::named(0, 0, 1286), Node::named(0, 0, 1287), Node::branch(5443, 1), Node::branch(5444, 1),
    Node::named(0, 0, 228), Node::branch(5445, 1), Node::branch(5446, 1), Node::branch(5447, 1),
    Node::branch(5448, 1), Node::named(0, 0, 1288), Node::branch(5449, 1), Node::branch(5450, 1),
    Node::branch(5451, 1), Node::branch(5452, 1), Node::branch(5453, 1), Node::branch(5454, 1),
    Node::branch(5455, 1), Node::named(5456, 2, 237), Node::named(0, 0, 1289),
    Node::named(0, 0, 1290), Node::named(0, 0, 1291), Node::named(0, 0, 1292),
    Node::branch(5458, 1), Node::named(0, 0, 1293), Node::named(0, 0, 1294),
    Node::named(0, 0, 1295), Node::named(0, 0, 1296), Node::named(0, 0, 1297),
    Node::named(0, 0, 1298), Node::branch(5459, 1), Node::branch(5460, 1), Node::named(0, 0, 1299),
    Node::branch(5461, 1), Node::branch(5462, 1), Node::named(0, 0, 1300), Node::named(0, 0, 232),
    Node::named(5463, 1, 1301), Node::named(0, 0, 1302), Node::named(0, 0, 1303),
    Node::named(0, 0, 1304), Node::branch(5464, 1), Node::named(0, 0, 1305), Node::branch(5465, 1),
    Node::named(0, 0, 1306), Node::branch(5466, 1), Node::branch(5467, 1), Node::branch(5468, 1),
    Node::branch(5469, 1), Node::named(0, 0, 1307), Node::branch(5470, 1), Node::legacy(0, 0, 1308),
    Node::named(0, 0, 1309), Node::named(0, 0, 1310), Node::named(0, 0, 1311),
    Node::legacy(0, 0, 1312), Node::named(5471, 1, 1313), Node::named(0, 0, 1314),
    Node::branch(5472, 1), Node::branch(5473, 1), Node::branch(5474, 1), Node::branch(5475, 1),
    Node::branch(5476, 1), Node::named(5477, 1, 1315), Node::named(0, 0, 1316),
    Node::named(0, 0, 1317), Node::branch(5478, 1), Node::named(0, 0, 1318), Node::branch(5479, 1),
    Node::branch(5480, 1), Node::branch(5481, 1), Node::named(0, 0, 518), Node::branch(5482, 1),
    Node::named(0, 0, 538), Node::branch(5483, 1), Node::branch(5484, 1), Node::branch(5485, 1),
    Node::branch(5486, 1), Node::branch(5487, 1), Node::named(0, 0, 1319), Node::named(0, 0, 1320),
    Node::named(0, 0, 589), Node::named(0, 0, 1321), Node::named(0, 0, 1322),
    Node::named(0, 0, 1323), Node::named(0, 0, 1324), Node::branch(5488, 1),
    Node::named(0, 0, 1325), Node::named(0, 0, 1326), Node::named(0, 0, 45), Node::named(0, 0, 46),
    Node::named(0, 0, 1327), Node::named(0, 0, 1328), Node::named(0, 0, 1329),
    Node::named(0, 0, 1330), Node::named(0, 0, 659), Node::legacy(0, 0, 1331),
    Node::named(0, 0, 1332), Node::named(0, 0, 1333), Node::named(0, 0, 118), Node::branch(5489, 1),
    Node::branch(5490, 1), Node::branch(5491, 1), Node::named(0, 0, 1075), Node::branch(5492, 1),
    Node::branch(5493, 1), Node::named(0, 0, 55), Node::named(0, 0, 1334), Node::named(0, 0, 725),
    Node::branch(5494, 1), Node::branch(5495, 1), Node::branch(5496, 1), Node::branch(5497, 1),
    Node::branch(5498, 1), Node::branch(5499, 1), Node::branch(5500, 1), Node::branch(5501, 1),
    Node::branch(5502, 1), Node::branch(5503, 1), Node::branch(5504, 1), Node::branch(5505, 1),
    Node::branch(5506, 1), Node::named(0, 0, 393), Node::branch(5507, 1), Node::branch(5508, 1),
    Node::branch(5509, 1), Node::branch(5510, 1), Node::branch(5511, 2), Node::branch(5513, 1),
    Node::branch(5514, 1), Node::branch(5515, 1), Node::branch(5516, 1), Node::branch(5517, 1),
    Node::branch(5518, 1), Node::branch(5519, 1), Node::named(5520, 1, 241), Node::branch(5521, 1),
    Node::named(0, 0, 28), Node::branch(5522, 1), Node::branch(5523, 1), Node::named(0, 0, 1335),
    Node::branch(5524, 1), Node::branch(5525, 1), Node::branch(5526, 1), Node::branch(5527, 1),
    Node::branch(5528, 1), Node::branch(5529, 1), Node::branch(5530, 6), Node::branch(5536, 1),
    Node::branch(5537, 1), Node::branch(5538, 1), Node::branch(5539, 1), Node::branch(5540, 1),
    Node::named(0, 0, 529), Node::branch(5541, 1), Node::branch(5542, 1), Node::branch(5543, 1),
    Node::branch(5544, 1), Node::branch(5545, 1), Node::branch(5546, 1), Node::branch(5547, 1),
    Node::branch(5548, 1), Node::branch(5549, 1), Node::branch(5550, 1), Node::branch(5551, 1),
    Node::named(5552, 2, 741), Node::branch(5554, 1), Node::branch(5555, 1), Node::branch(5556, 1),
    Node::branch(5557, 1), Node::branch(5558, 1), Node::branch(5559, 1), Node::branch(5560, 1),
    Node::branch(5561, 1), Node::branch(5562, 1), Node::branch(5563, 1), Node::branch(5564, 1),
    Node::branch(5565, 1), Node::branch(5566, 1), Node::branch(5567, 1), Node::branch(5568, 1),
    Node::branch(5569, 1), Node::branch(5570, 1), Node::branch(5571, 1), Node::branch(5572, 1),
    Node::branch(5573, 1), Node::branch(5574, 1), Node::branch(5575, 1), Node::branch(5576, 1),
    Node::branch(5577, 1), Node::branch(5578, 1), Node::branch(5579, 1), Node::named(0, 0, 1336),
    Node::named(0, 0, 1337), Node::branch(5580, 1), Node::branch(5581, 1), Node::branch(5582, 1),
    Node::branch(5583, 1), Node::branch(5584, 1), Node::branch(5585, 1), Node::branch(5586, 1),
    Node::branch(5587, 1), Node::branch(5588, 2), Node::branch(5590, 1), Node::named(5591, 5, 202),
    Node::branch(5596, 1), Node::branch(5597, 1), Node::branch(5598, 1), Node::branch(5599, 1),
    Node::branch(5600, 1), Node::branch(5601, 1), Node::branch(5602, 1), Node::branch(5603, 1),
    Node::branch(5604, 1), Node::branch(5605, 1), Node::named(0, 0, 1338), Node::branch(5606, 1),
    Node::named(0, 0, 881), Node::branch(5607, 1), Node::branch(5608, 1), Node::branch(5609, 1),
    Node::branch(5610, 1), Node::branch(5611, 1), Node::branch(5612, 1), Node::named(0, 0, 523),
    Node::branch(5613, 1), Node::branch(5614, 2), Node::branch(5616, 1), Node::branch(5617, 1),
    Node::branch(5618, 1), Node::branch(5619, 2), Node::branch(5621, 1), Node::branch(5622, 1),
    Node::branch(5623, 1), Node::branch(5624, 3), Node::branch(5627, 1), Node::branch(5628, 1),
    Node::branch(5629, 1), Node::branch(5630, 1), Node::branch(5631, 1), Node::branch(5632, 1),
    Node::branch(5633, 1), Node::branch(5634, 1), Node::branch(5635, 1), Node::branch(5636, 1),
    Node::branch(5637, 1), Node::branch(5638, 1), Node::branch(5639, 1), Node::branch(5640, 1),
    Node::branch(5641, 1), Node::branch(5642, 1), Node::branch(5643, 1), Node::branch(5644, 1),
    Node::branch(5645, 1), Node::branch(5646, 1), Node::branch(5647, 1), Node::branch(5648, 1),
    Node::branch(5649, 1), Node::branch(5650, 1), Node::branch(5651, 1), Node::branch(5652, 1),
    Node::branch(5653, 1), Node::branch(5654, 1), Node::branch(5655, 1), Node::named(5656, 2, 580),
    Node::branch(5658, 1), Node::branch(5659, 1), Node::branch(5660, 1), Node::named(0, 0, 578),
    Node::branch(5661, 1), Node::branch(5662, 1), Node::branch(5663, 1), Node::named(0, 0, 1339),
    Node::branch(5664, 1), Node::branch(5665, 1), Node::branch(5666, 1), Node::named(0, 0, 664),
    Node::branch(5667, 1), Node::branch(5668, 8), Node::named(5676, 1, 1340),
    Node::named(0, 0, 1341), Node::branch(5677, 1), Node::named(0, 0, 1008), Node::branch(5678, 1),
    Node::branch(5679, 1), Node::branch(5680, 1), Node::branch(5681, 1), Node::named(5682, 1, 371),
    Node::branch(5683, 1), Node::branch(5684, 1), Node::named(0, 0, 1075), Node::named(0, 0, 1342),
    Node::named(0, 0, 960), Node::named(0, 0, 986), Node::named(0, 0, 992), Node::branch(5685, 1),
    Node::branch(5686, 1), Node::branch(5687, 1), Node::named(0, 0, 946), Node::branch(5688, 1),
    Node::branch(5689, 1), Node::branch(5690, 1), Node::branch(5691, 1), Node::branch(5692, 1),
    Node::branch(5693, 1), Node::named(0, 0, 1343), Node::branch(5694, 1), Node::named(0, 0, 890),
    Node::branch(5695, 1), Node::branch(5696, 1), Node::branch(5697, 1), Node::named(0, 0, 1344),
    Node::named(0, 0, 1345), Node::branch(5698, 1), Node::branch(5699, 1), Node::branch(5700, 1),
    Node::branch(5701, 5), Node::branch(5706, 1), Node::named(0, 0, 1346), Node::branch(5707, 1),
    Node::named(0, 0, 1000), Node::branch(5708, 1), Node::branch(5709, 1), Node::named(0, 0, 1347),
    Node::named(0, 0, 1348), Node::named(0, 0, 1349), Node::named(0, 0, 1350),
    Node::branch(5710, 1), Node::named(0, 0, 1351), Node::branch(5711, 2), Node::branch(5713, 1),
    Node::branch(5714, 1), Node::branch(5715, 1), Node::branch(5716, 1), Node::named(0, 0, 899),
    Node::named(0, 0, 1009), Node::named(0, 0, 754), Node::named(0, 0, 1352),
    Node::named(5717, 1, 393), Node::named(0, 0, 1140), Node::branch(5718, 1),
    Node::branch(5719, 1), Node::branch(5720, 1), Node::named(0, 0, 1242), Node::branch(5721, 1),
    Node::branch(5722, 1), Node::branch(5723, 1), Node::branch(5724, 1), Node::branch(5725, 1),
    Node::branch(5726, 1), Node::named(0, 0, 1353), Node::branch(5727, 1), Node::branch(5728, 1),
    Node::branch(5729, 1), Node::named(0, 0, 408), Node::named(0, 0, 1113), Node::branch(5730, 2),
    Node::named(0, 0, 1354), Node::branch(5732, 1), Node::branch(5733, 1), Node::branch(5734, 1),
    Node::branch(5735, 1), Node::branch(5736, 1), Node::branch(5737, 1), Node::named(5738, 1, 1355),
    Node::branch(5739, 1), Node::named(0, 0, 1356), Node::branch(5740, 1), Node::branch(5741, 1),
    Node::branch(5742, 1), Node::named(0, 0, 25), Node::branch(5743, 1), Node::named(0, 0, 1357),
    Node::branch(5744, 1), Node::branch(5745, 1), Node::branch(5746, 1), Node::branch(5747, 1),
    Node::branch(5748, 1), Node::branch(5749, 1), Node::branch(5750, 1), Node::branch(5751, 1),
    Node::branch(5752, 1), Node::branch(5753, 1), Node::branch(5754, 1), Node::named(0, 0, 796),
    Node::named(0, 0, 1358), Node::branch(5755, 1), Node::named(0, 0, 1359),
    Node::named(0, 0, 1360), Node::named(0, 0, 1361), Node::named(0, 0, 1362),
    Node::named(0, 0, 1363), Node::branch(5756, 1), Node::branch(5757, 1), Node::branch(5758, 1),
    Node::branch(5759, 1), Node::branch(5760, 1), Node::branch(5761, 1), Node::branch(5762, 1),
    Node::named(5763, 1, 1364), Node::branch(5764, 1), Node::named(0, 0, 833),
    Node::branch(5765, 1), Node::branch(5766, 1), Node::named(0, 0, 32), Node::named(0, 0, 461),
    Node::branch(5767, 1), Node::branch(5768, 1), Node::branch(5769, 1), Node::branch(5770, 1),
    Node::branch(5771, 1), Node::branch(5772, 1), Node::branch(5773, 1), Node::named(0, 0, 1365),
    Node::named(0, 0, 182), Node::branch(5774, 1), Node::named(0, 0, 1366), Node::branch(5775, 1),
    Node::named(0, 0, 1367), Node::branch(5776, 1), Node::named(0, 0, 468), Node::branch(5777, 1),
    Node::branch(5778, 1), Node::branch(5779, 1), Node::branch(5780, 1), Node::named(0, 0, 1368),
    Node::branch(5781, 1), Node::branch(5782, 1), Node::branch(5783, 1), Node::branch(5784, 1),
    Node::named(0, 0, 193), Node::named(5785, 1, 843), Node::branch(5786, 1),
    Node::named(0, 0, 848), Node::named(0, 0, 1211), Node::branch(5787, 1), Node::branch(5788, 1),
    Node::branch(5789, 1), Node::branch(5790, 1), Node::branch(5791, 1), Node::named(0, 0, 859),
    Node::named(0, 0, 1369), Node::named(0, 0, 1370), Node::named(0, 0, 860),
    Node::named(0, 0, 1371), Node::named(0, 0, 1372), Node::branch(5792, 1),
    Node::named(0, 0, 1373), Node::named(0, 0, 488), Node::branch(5793, 1), Node::branch(5794, 1),
    Node::branch(5795, 1), Node::named(0, 0, 1374), Node::named(0, 0, 1375),
    Node::named(5796, 1, 982), Node::named(0, 0, 489), Node::named(5797, 1, 983),
    Node::branch(5798, 1), Node::named(0, 0, 1376), Node::named(0, 0, 1377),
    Node::named(0, 0, 1378), Node::named(0, 0, 873), Node::named(0, 0, 1379),
    Node::named(0, 0, 1380), Node::named(0, 0, 513), Node::named(0, 0, 1381), Node::branch(5799, 1),
    Node::branch(5800, 1), Node::named(0, 0, 1382), Node::branch(5801, 1), Node::named(0, 0, 1383),
    Node::branch(5802, 1), Node::named(0, 0, 1384), Node::named(0, 0, 1385),
    Node::named(0, 0, 1386), Node::branch(5803, 1), Node::branch(5804, 1), Node::branch(5805, 1),
    Node::branch(5806, 1), Node::branch(5807, 1), Node::branch(5808, 1), Node::named(0, 0, 896),
    Node::branch(5809, 1), Node::branch(5810, 1), Node::branch(5811, 1), Node::branch(5812, 1),
    Node::named(0, 0, 1387), Node::named(0, 0, 1121), Node::branch(5813, 1),
    Node::named(0, 0, 1388), Node::named(0, 0, 1389), Node::branch(5814, 1),
    Node::named(0, 0, 1390), Node::named(0, 0, 1391), Node::named(0, 0, 1392),
    Node::named(0, 0, 319), Node::branch(5815, 1), Node::branch(5816, 1), Node::branch(5817, 1),
    Node::branch(5818, 1), Node::branch(5819, 1), Node::branch(5820, 1), Node::branch(5821, 1),
    Node::branch(5822, 1), Node::branch(5823, 1), Node::named(0, 0, 1393), Node::branch(5824, 1),
    Node::branch(5825, 1), Node::named(0, 0, 1394), Node::branch(5826, 1), Node::named(0, 0, 933),
    Node::branch(5827, 1), Node::branch(5828, 1), Node::branch(5829, 1), Node::named(0, 0, 1395),
    Node::named(0, 0, 1396), Node::branch(5830, 1), Node::branch(5831, 1), Node::branch(5832, 1),
    Node::branch(5833, 1), Node::branch(5834, 1), Node::branch(5835, 1), Node::named(0, 0, 1397),
    Node::named(0, 0, 1398), Node::named(0, 0, 1399), Node::named(0, 0, 1400),
    Node::branch(5836, 1), Node::branch(5837, 1), Node::branch(5838, 1), Node::branch(5839, 1),
    Node::branch(5840, 1), Node::branch(5841, 1), Node::branch(5842, 1), Node::named(0, 0, 929),
    Node::named(0, 0, 1401), Node::named(0, 0, 1402), Node::named(0, 0, 1403),
    Node::named(0, 0, 1404), Node::named(0, 0, 1405), Node::named(0, 0, 1406),
    Node::named(0, 0, 1407), Node::branch(5843, 1), Node::branch(5844, 1), Node::named(0, 0, 952),
    Node::branch(5845, 1), Node::branch(5846, 1), Node::branch(5847, 1), Node::branch(5848, 1),
    Node::branch(5849, 1), Node::named(0, 0, 1408), Node::branch(5850, 1), Node::branch(5851, 1),
    Node::named(0, 0, 1409), Node::named(0, 0, 1410), Node::branch(5852, 1), Node::branch(5853, 2),
    Node::branch(5855, 1), Node::named(0, 0, 580), Node::branch(5856, 1), Node::branch(5857, 1),
    Node::named(0, 0, 582), Node::branch(5858, 1), Node::branch(5859, 1), Node::named(0, 0, 1411),
    Node::branch(5860, 1), Node::branch(5861, 1), Node::branch(5862, 1), Node::branch(5863, 1),
    Node::branch(5864, 1), Node::branch(5865, 1), Node::branch(5866, 1), Node::branch(5867, 1),
    Node::branch(5868, 1), Node::named(0, 0, 1412), Node::named(0, 0, 1413), Node::branch(5869, 1),
    Node::branch(5870, 1), Node::branch(5871, 1), Node::branch(5872, 1), Node::branch(5873, 1),
    Node::branch(5874, 1), Node::branch(5875, 1), Node::branch(5876, 1), Node::branch(5877, 1),
    Node::branch(5878, 1), Node::branch(5879, 1), Node::branch(5880, 1), Node::branch(5881, 1),
    Node::branch(5882, 1), Node::branch(5883, 1), Node::named(0, 0, 1414), Node::branch(5884, 1),
    Node::branch(5885, 1), Node::named(0, 0, 749), Node::branch(5886, 1), Node::branch(5887, 2),
    Node::branch(5889, 1), Node::branch(5890, 1), Node::branch(5891, 1), Node::branch(5892, 2),
    Node::branch(5894, 1), Node::branch(5895, 1), Node::branch(5896, 1), Node::branch(5897, 3),
    Node::branch(5900, 1), Node::branch(5901, 1), Node::branch(5902, 1), Node::branch(5903, 1),
    Node::branch(5904, 1), Node::branch(5905, 1), Node::branch(5906, 1), Node::branch(5907, 1),
    Node::branch(5908, 1), Node::branch(5909, 1), Node::branch(5910, 1), Node::branch(5911, 1),
    Node::branch(5912, 1), Node::branch(5913, 1), Node::branch(5914, 1), Node::branch(5915, 1),
    Node::branch(5916, 1), Node::branch(5917, 1), Node::branch(5918, 1), Node::branch(5919, 1),
    Node::branch(5920, 1), Node::branch(5921, 1), Node::named(0, 0, 167), Node::branch(5922, 1),
    Node::branch(5923, 1), Node::branch(5924, 1), Node::branch(5925, 1), Node::branch(5926, 1),
    Node::branch(5927, 1), Node::branch(5928, 1), Node::branch(5929, 2), Node::branch(5931, 1),
    Node::branch(5932, 1), Node::branch(5933, 1), Node::branch(5934, 1), Node::branch(5935, 1),
    Node::branch(5936, 1), Node::branch(5937, 1), Node::branch(5938, 1), Node::branch(5939, 1),
    Node::branch(5940, 1), Node::branch(5941, 1), Node::branch(5942, 1), Node::branch(5943, 1),
    Node::branch(5944, 1), Node::named(0, 0, 1415), Node::branch(5945, 1), Node::branch(5946, 1),
    Node::branch(5947, 1), Node::branch(5948, 2), Node::branch(5950, 1), Node::branch(5951, 2),
    Node::branch(5953, 1), Node::branch(5954, 1), Node::branch(5955, 1), Node::branch(5956, 1),
    Node::branch(5957, 1), Node::branch(5958, 1), Node::branch(5959, 3), Node::branch(5962, 1),
    Node::branch(5963, 1), Node::branch(5964, 1), Node::branch(5965, 1), Node::branch(5966, 1),
    Node::branch(5967, 1), Node::branch(5968, 1), Node::named(5969, 1, 35), Node::branch(5970, 1),
    Node::branch(5971, 1), Node::branch(5972, 1), Node::branch(5973, 1), Node::branch(5974, 1),
    Node::branch(5975, 1), Node::branch(5976, 1), Node::branch(5977, 1), Node::branch(5978, 1),
    Node::branch(5979, 1), Node::branch(5980, 1), Node::branch(5981, 1), Node::branch(5982, 1),
    Node::branch(5983, 1), Node::branch(5984, 1), Node::branch(5985, 1), Node::branch(5986, 1),
    Node::branch(5987, 1), Node::named(5988, 3, 491), Node::branch(5991, 1), Node::branch(5992, 1),
    Node::branch(5993, 2), Node::branch(5995, 1), Node::named(0, 0, 517), Node::branch(5996, 1),
    Node::branch(5997, 1), Node::named(5998, 3, 42), Node::branch(6001, 1), Node::branch(6002, 2),
    Node::branch(6004, 1), Node::branch(6005, 1), Node::branch(6006, 1), Node::branch(6007, 1),
    Node::branch(6008, 1), Node::branch(6009, 1), Node::branch(6010, 1), Node::named(6011, 2, 979),
    Node::branch(6013, 1), Node::branch(6014, 1), Node::branch(6015, 1), Node::branch(6016, 1),
    Node::branch(6017, 1), Node::branch(6018, 1), Node::branch(6019, 1), Node::branch(6020, 1),
    Node::branch(6021, 1), Node::branch(6022, 1), Node::branch(6023, 1), Node::branch(6024, 1),
    Node::branch(6025, 1), Node::branch(6026, 1), Node::branch(6027, 1), Node::branch(6028, 2),
    Node::branch(6030, 1), Node::branch(6031, 1), Node::named(6032, 3, 44), Node::named(0, 0, 36),
    Node::named(6035, 1, 237), Node::branch(6036, 1), Node::branch(6037, 1), Node::branch(6038, 1),
    Node::branch(6039, 1), Node::branch(6040, 1), Node::branch(6041, 1), Node::branch(6042, 1),
    Node::named(0, 0, 1416), Node::named(0, 0, 1187), Node::branch(6043, 1), Node::branch(6044, 1),
    Node::branch(6045, 1), Node::branch(6046, 1), Node::branch(6047, 1), Node::branch(6048, 1),
    Node::branch(6049, 1), Node::branch(6050, 1), Node::branch(6051, 1), Node::branch(6052, 1),
    Node::branch(6053, 1), Node::branch(6054, 4), Node::branch(6058, 1), Node::branch(6059, 1),
    Node::named(0, 0, 1417), Node::named(0, 0, 1418), Node::named(0, 0, 1419),
    Node::named(0, 0, 1420), Node::named(0, 0, 1421), Node::named(0, 0, 1422),
    Node::named(0, 0, 1423), Node::named(0, 0, 1424), Node::named(0, 0, 1425),
    Node::named(0, 0, 1426), Node::named(0, 0, 126), Node::named(0, 0, 1427),
    Node::named(0, 0, 672), Node::branch(6060, 1), Node::branch(6061, 1), Node::branch(6062, 1),
    Node::named(0, 0, 1074), Node::named(0, 0, 1428), Node::named(0, 0, 1327),
    Node::branch(6063, 1), Node::named(0, 0, 1329), Node::branch(6064, 1), Node::named(0, 0, 1330),
    Node::named(0, 0, 659), Node::branch(6065, 1), Node::branch(6066, 1), Node::branch(6067, 1),
    Node::named(0, 0, 1200), Node::named(0, 0, 1301), Node::named(0, 0, 1429),
    Node::named(0, 0, 1430), Node::branch(6068, 1), Node::branch(6069, 1), Node::branch(6070, 1),
    Node::named(0, 0, 95), Node::named(0, 0, 38), Node::branch(6071, 1), Node::branch(6072, 1),
    Node::branch(6073, 1), Node::named(0, 0, 1431), Node::named(0, 0, 727), Node::branch(6074, 1),
    Node::branch(6075, 1), Node::named(0, 0, 1432), Node::branch(6076, 1), Node::branch(6077, 1),
    Node::named(0, 0, 738), Node::branch(6078, 1), Node::branch(6079, 1), Node::named(0, 0, 1433),
    Node::branch(6080, 1), Node::branch(6081, 1), Node::named(0, 0, 401), Node::named(0, 0, 1201),
    Node::branch(6082, 1), Node::branch(6083, 1), Node::branch(6084, 1), Node::branch(6085, 1),
    Node::branch(6086, 1), Node::named(0, 0, 644), Node::named(0, 0, 1434), Node::named(0, 0, 1435),
    Node::named(0, 0, 758), Node::branch(6087, 1), Node::branch(6088, 1), Node::named(0, 0, 1436),
    Node::branch(6089, 1), Node::branch(6090, 1), Node::branch(6091, 1), Node::named(0, 0, 1437),
    Node::named(0, 0, 156), Node::named(0, 0, 1438), Node::named(0, 0, 422), Node::branch(6092, 1),
    Node::branch(6093, 1), Node::branch(6094, 1), Node::branch(6095, 1), Node::branch(6096, 1),
    Node::named(0, 0, 1272), Node::named(0, 0, 1292), Node::branch(6097, 1), Node::branch(6098, 1),
    Node::named(0, 0, 290), Node::named(0, 0, 4), Node::named(0, 0, 1439), Node::named(0, 0, 350),
    Node::named(0, 0, 1158), Node::named(0, 0, 1440), Node::named(0, 0, 1441),
    Node::named(0, 0, 1442), Node::branch(6099, 1), Node::branch(6100, 1), Node::branch(6101, 1),
    Node::branch(6102, 1), Node::branch(6103, 1), Node::named(0, 0, 177), Node::named(0, 0, 1443),
    Node::branch(6104, 1), Node::branch(6105, 1), Node::branch(6106, 1), Node::named(0, 0, 1104),
    Node::branch(6107, 1), Node::named(0, 0, 456), Node::branch(6108, 2), Node::branch(6110, 1),
    Node::branch(6111, 1), Node::branch(6112, 1), Node::named(0, 0, 1107), Node::named(0, 0, 1444),
    Node::branch(6113, 1), Node::branch(6114, 1), Node::branch(6115, 1), Node::named(0, 0, 1445),
    Node::branch(6116, 1), Node::named(0, 0, 840), Node::branch(6117, 1), Node::branch(6118, 1),
    Node::branch(6119, 1), Node::named(0, 0, 306), Node::named(0, 0, 1446), Node::branch(6120, 1),
    Node::branch(6121, 1), Node::branch(6122, 1), Node::branch(6123, 1), Node::named(0, 0, 1447),
    Node::branch(6124, 1), Node::branch(6125, 1), Node::branch(6126, 1), Node::branch(6127, 1),
    Node::branch(6128, 1), Node::branch(6129, 1), Node::branch(6130, 1), Node::named(0, 0, 1448),
    Node::named(0, 0, 214), Node::branch(6131, 1), Node::named(0, 0, 1449), Node::named(0, 0, 1450),
    Node::branch(6132, 1), Node::branch(6133, 1), Node::branch(6134, 1), Node::named(0, 0, 522),
    Node::named(0, 0, 1244), Node::named(0, 0, 1451), Node::named(0, 0, 1452),
    Node::named(0, 0, 1453), Node::branch(6135, 1), Node::named(0, 0, 1454), Node::branch(6136, 1),
    Node::named(0, 0, 13), Node::branch(6137, 1), Node::branch(6138, 1), Node::branch(6139, 1),
    Node::branch(6140, 1), Node::branch(6141, 1), Node::branch(6142, 1), Node::branch(6143, 1),
    Node::branch(6144, 1), Node::named(0, 0, 1455), Node::named(0, 0, 1456),
    Node::named(0, 0, 1457), Node::named(0, 0, 934), Node::named(0, 0, 188), Node::branch(6145, 1),
    Node::branch(6146, 1), Node::named(0, 0, 1458), Node::branch(6147, 1),
    Node::named(6148, 1, 944), Node::named(6149, 1, 945), Node::branch(6150, 2),
    Node::named(6152, 1, 562), Node::branch(6153, 1), Node::branch(6154, 1), Node::branch(6155, 1),
    Node::branch(6156, 1), Node::named(0, 0, 546), Node::named(0, 0, 1271),
    Node::named(6157, 1, 568), Node::branch(6158, 1), Node::branch(6159, 1),
    Node::named(0, 0, 1299), Node::branch(6160, 1), Node::named(0, 0, 232), Node::named(0, 0, 1459),
    Node::named(6161, 4, 584), Node::named(0, 0, 1460), Node::named(0, 0, 1461),
    Node::branch(6165, 1), Node::branch(6166, 1), Node::named(0, 0, 1313), Node::branch(6167, 1),
    Node::branch(6168, 1), Node::branch(6169, 1), Node::named(0, 0, 1315), Node::branch(6170, 1),
    Node::named(0, 0, 1163), Node::branch(6171, 1), Node::branch(6172, 1), Node::named(0, 0, 1274),
    Node::branch(6173, 1), Node::branch(6174, 1), Node::named(0, 0, 1299), Node::branch(6175, 1),
    Node::branch(6176, 1), Node::named(0, 0, 934), Node::branch(6177, 1), Node::branch(6178, 1),
    Node::named(0, 0, 1199), Node::named(0, 0, 504), Node::branch(6179, 1), Node::branch(6180, 1),
    Node::branch(6181, 1), Node::branch(6182, 1), Node::branch(6183, 1), Node::named(0, 0, 762),
    Node::branch(6184, 1), Node::named(0, 0, 1090), Node::branch(6185, 1), Node::branch(6186, 1),
    Node::branch(6187, 1), Node::branch(6188, 1), Node::named(0, 0, 61), Node::branch(6189, 1),
    Node::branch(6190, 1), Node::branch(6191, 1), Node::branch(6192, 1), Node::branch(6193, 1),
    Node::branch(6194, 1), Node::branch(6195, 1), Node::named(6196, 2, 391),
    Node::named(0, 0, 1462), Node::branch(6198, 1), Node::branch(6199, 1), Node::branch(6200, 1),
    Node::branch(6201, 2), Node::branch(6203, 1), Node::named(0, 0, 389), Node::branch(6204, 1),
    Node::branch(6205, 1), Node::branch(6206, 1), Node::branch(6207, 1), Node::branch(6208, 1),
    Node::branch(6209, 1), Node::branch(6210, 1), Node::branch(6211, 1), Node::branch(6212, 1),
    Node::branch(6213, 1), Node::branch(6214, 1), Node::branch(6215, 1), Node::branch(6216, 1),
    Node::branch(6217, 1), Node::branch(6218, 1), Node::branch(6219, 1), Node::branch(6220, 1),
    Node::named(0, 0, 720), Node::branch(6221, 1), Node::branch(6222, 1), Node::branch(6223, 2),
    Node::branch(6225, 1), Node::branch(6226, 1), Node::named(6227, 2, 449), Node::branch(6229, 1),
    Node::branch(6230, 1), Node::branch(6231, 1), Node::branch(6232, 1), Node::named(0, 0, 1180),
    Node::branch(6233, 2), Node::branch(6235, 1), Node::branch(6236, 1), Node::branch(6237, 1),
    Node::branch(6238, 1), Node::branch(6239, 1), Node::branch(6240, 1), Node::branch(6241, 1),
    Node::named(0, 0, 446), Node::branch(6242, 1), Node::branch(6243, 1), Node::branch(6244, 1),
    Node::branch(6245, 1), Node::branch(6246, 1), Node::named(0, 0, 461), Node::branch(6247, 1),
    Node::branch(6248, 1), Node::branch(6249, 1), Node::branch(6250, 1), Node::branch(6251, 1),
    Node::branch(6252, 1), Node::branch(6253, 1), Node::branch(6254, 1), Node::branch(6255, 1),
    Node::branch(6256, 1), Node::named(0, 0, 304), Node::named(0, 0, 33), Node::branch(6257, 1),
    Node::branch(6258, 1), Node::branch(6259, 1), Node::branch(6260, 1), Node::branch(6261, 1),
    Node::branch(6262, 1), Node::branch(6263, 1), Node::named(0, 0, 1463), Node::branch(6264, 1),
    Node::branch(6265, 1), Node::branch(6266, 1), Node::named(0, 0, 1211), Node::branch(6267, 1),
    Node::branch(6268, 1), Node::branch(6269, 1), Node::branch(6270, 1), Node::branch(6271, 1),
    Node::branch(6272, 1), Node::branch(6273, 1), Node::branch(6274, 1), Node::branch(6275, 1),
    Node::branch(6276, 2), Node::branch(6278, 1), Node::branch(6279, 1), Node::branch(6280, 1),
    Node::branch(6281, 1), Node::named(6282, 1, 982), Node::branch(6283, 1), Node::branch(6284, 1),
    Node::branch(6285, 1), Node::branch(6286, 1), Node::branch(6287, 1), Node::branch(6288, 1),
    Node::branch(6289, 2), Node::named(0, 0, 1464), Node::branch(6291, 1), Node::branch(6292, 1),
    Node::named(0, 0, 41), Node::branch(6293, 1), Node::branch(6294, 1), Node::branch(6295, 1),
    Node::branch(6296, 1), Node::branch(6297, 1), Node::branch(6298, 1), Node::branch(6299, 1),
    Node::branch(6300, 1), Node::branch(6301, 1), Node::branch(6302, 1), Node::branch(6303, 1),
    Node::branch(6304, 1), Node::branch(6305, 2), Node::branch(6307, 1), Node::branch(6308, 1),
    Node::branch(6309, 1), Node::branch(6310, 1), Node::branch(6311, 1), Node::branch(6312, 1),
    Node::branch(6313, 1), Node::branch(6314, 1), Node::branch(6315, 1), Node::branch(6316, 1),
    Node::branch(6317, 1), Node::branch(6318, 1), Node::branch(6319, 1), Node::branch(6320, 1),
    Node::branch(6321, 1), Node::branch(6322, 1), Node::branch(6323, 1), Node::branch(6324, 1),
    Node::branch(6325, 1), Node::branch(6326, 1), Node::branch(6327, 1), Node::branch(6328, 1),
    Node::branch(6329, 1), Node::branch(6330, 1), Node::branch(6331, 1), Node::branch(6332, 1),
    Node::named(0, 0, 1298), Node::branch(6333, 1), Node::named(0, 0, 1300), Node::branch(6334, 1),
    Node::branch(6335, 1), Node::branch(6336, 1), Node::named(0, 0, 570), Node::branch(6337, 2),
    Node::branch(6339, 1), Node::named(0, 0, 971), Node::branch(6340, 1), Node::branch(6341, 1),
    Node::branch(6342, 1), Node::branch(6343, 1), Node::branch(6344, 1), Node::branch(6345, 1),
    Node::branch(6346, 1), Node::branch(6347, 1), Node::branch(6348, 1), Node::branch(6349, 1),
    Node::branch(6350, 1), Node::branch(6351, 1), Node::branch(6352, 1), Node::branch(6353, 1),
    Node::branch(6354, 1), Node::named(0, 0, 1078), Node::named(0, 0, 717), Node::named(0, 0, 1328),
    Node::branch(6355, 1), Node::branch(6356, 1), Node::branch(6357, 1), Node::branch(6358, 1),
    Node::named(0, 0, 1199), Node::named(0, 0, 726), Node::branch(6359, 1), Node::branch(6360, 1),
    Node::branch(6361, 1), Node::branch(6362, 1), Node::branch(6363, 1), Node::named(0, 0, 264),
    Node::branch(6364, 1), Node::branch(6365, 1), Node::branch(6366, 1), Node::branch(6367, 1),
    Node::branch(6368, 1), Node::branch(6369, 1), Node::named(0, 0, 930), Node::branch(6370, 1),
    Node::named(0, 0, 391), Node::branch(6371, 1), Node::branch(6372, 1), Node::branch(6373, 1),
    Node::branch(6374, 1), Node::branch(6375, 1), Node::branch(6376, 1), Node::branch(6377, 1),
    Node::named(0, 0, 153), Node::named(0, 0, 155), Node::branch(6378, 1), Node::named(0, 0, 427),
    Node::named(0, 0, 1148), Node::branch(6379, 1), Node::branch(6380, 1),
    Node::named(6381, 1, 449), Node::branch(6382, 1), Node::branch(6383, 1), Node::branch(6384, 3),
    Node::branch(6387, 1), Node::branch(6388, 1), Node::named(0, 0, 176), Node::branch(6389, 1),
    Node::branch(6390, 1), Node::branch(6391, 1), Node::branch(6392, 1), Node::branch(6393, 1),
    Node::branch(6394, 1), Node::branch(6395, 2), Node::named(0, 0, 465), Node::branch(6397, 1),
    Node::branch(6398, 1), Node::branch(6399, 1), Node::branch(6400, 1), Node::branch(6401, 1),
    Node::branch(6402, 1), Node::named(0, 0, 480), Node::branch(6403, 1), Node::branch(6404, 1),
    Node::named(0, 0, 484), Node::named(0, 0, 487), Node::branch(6405, 1), Node::named(0, 0, 485),
    Node::branch(6406, 1), Node::named(6407, 1, 867), Node::named(6408, 1, 869),
    Node::branch(6409, 2), Node::named(0, 0, 417), Node::branch(6411, 1), Node::branch(6412, 1),
    Node::branch(6413, 1), Node::branch(6414, 1), Node::named(0, 0, 314), Node::branch(6415, 1),
    Node::branch(6416, 1), Node::branch(6417, 2), Node::branch(6419, 1), Node::branch(6420, 1),
    Node::branch(6421, 1), Node::branch(6422, 1), Node::branch(6423, 1), Node::branch(6424, 1),
    Node::branch(6425, 1), Node::named(0, 0, 1279), Node::branch(6426, 1), Node::branch(6427, 1),
    Node::branch(6428, 1), Node::branch(6429, 1), Node::named(0, 0, 561), Node::named(6430, 1, 948),
    Node::branch(6431, 1), Node::branch(6432, 1), Node::branch(6433, 1), Node::named(0, 0, 567),
    Node::named(6434, 1, 950), Node::named(0, 0, 1298), Node::branch(6435, 1),
    Node::branch(6436, 1), Node::branch(6437, 1), Node::named(0, 0, 575), Node::branch(6438, 1),
    Node::branch(6439, 1), Node::branch(6440, 1), Node::branch(6441, 1), Node::branch(6442, 2),
    Node::branch(6444, 1), Node::branch(6445, 1), Node::branch(6446, 1), Node::named(0, 0, 524),
    Node::branch(6447, 1), Node::branch(6448, 1), Node::branch(6449, 1), Node::branch(6450, 1),
    Node::named(0, 0, 260), Node::branch(6451, 1), Node::branch(6452, 1), Node::named(0, 0, 885),
    Node::branch(6453, 1), Node::branch(6454, 1), Node::branch(6455, 2), Node::branch(6457, 1),
    Node::branch(6458, 1), Node::branch(6459, 1), Node::branch(6460, 1), Node::branch(6461, 1),
    Node::branch(6462, 1), Node::branch(6463, 3), Node::branch(6466, 2), Node::branch(6468, 1),
    Node::branch(6469, 1), Node::branch(6470, 1), Node::branch(6471, 1), Node::branch(6472, 1),
    Node::branch(6473, 1), Node::branch(6474, 1), Node::branch(6475, 1), Node::branch(6476, 1),
    Node::branch(6477, 1), Node::branch(6478, 1), Node::branch(6479, 1), Node::branch(6480, 1),
    Node::branch(6481, 1), Node::named(0, 0, 410), Node::branch(6482, 1), Node::branch(6483, 1),
    Node::branch(6484, 1), Node::branch(6485, 1), Node::named(0, 0, 278), Node::branch(6486, 1),
    Node::branch(6487, 1), Node::branch(6488, 1), Node::branch(6489, 1), Node::branch(6490, 1),
    Node::branch(6491, 1), Node::branch(6492, 1), Node::branch(6493, 1), Node::branch(6494, 1),
    Node::named(0, 0, 27), Node::branch(6495, 1), Node::branch(6496, 1), Node::branch(6497, 1),
    Node::named(0, 0, 302), Node::branch(6498, 1), Node::branch(6499, 1), Node::branch(6500, 1),
    Node::branch(6501, 1), Node::branch(6502, 1), Node::branch(6503, 1), Node::branch(6504, 1),
    Node::branch(6505, 1), Node::branch(6506, 1), Node::branch(6507, 1), Node::branch(6508, 1),
    Node::branch(6509, 1), Node::branch(6510, 1), Node::branch(6511, 1), Node::branch(6512, 1),
    Node::named(6513, 1, 817), Node::branch(6514, 1), Node::branch(6515, 1), Node::branch(6516, 1),
    Node::branch(6517, 1), Node::branch(6518, 1), Node::named(0, 0, 804), Node::branch(6519, 1),
    Node::branch(6520, 1), Node::branch(6521, 1), Node::branch(6522, 1), Node::branch(6523, 1),
    Node::branch(6524, 1), Node::branch(6525, 1), Node::branch(6526, 1), Node::branch(6527, 1),
    Node::branch(6528, 1), Node::branch(6529, 1), Node::branch(6530, 1), Node::branch(6531, 1),
    Node::branch(6532, 1), Node::branch(6533, 1), Node::branch(6534, 1), Node::branch(6535, 1),
    Node::named(0, 0, 859), Node::branch(6536, 1), Node::named(6537, 6, 198), Node::branch(6543, 1),
    Node::branch(6544, 1), Node::branch(6545, 1), Node::branch(6546, 1), Node::branch(6547, 1),
    Node::branch(6548, 1), Node::branch(6549, 1), Node::branch(6550, 1), Node::branch(6551, 1),
    Node::branch(6552, 1), Node::branch(6553, 1), Node::branch(6554, 1), Node::branch(6555, 1),
    Node::branch(6556, 1), Node::branch(6557, 1), Node::branch(6558, 1), Node::branch(6559, 1),
    Node::branch(6560, 1), Node::branch(6561, 1), Node::branch(6562, 1), Node::branch(6563, 1),
    Node::branch(6564, 1), Node::branch(6565, 1), Node::branch(6566, 1), Node::branch(6567, 1),
    Node::branch(6568, 1), Node::branch(6569, 1), Node::branch(6570, 1), Node::branch(6571, 1),
    Node::named(6572, 1, 620), Node::branch(6573, 1), Node::branch(6574, 1), Node::branch(6575, 1),
    Node::branch(6576, 1), Node::named(6577, 2, 533), Node::branch(6579, 1), Node::branch(6580, 1),
    Node::branch(6581, 1), Node::branch(6582, 1), Node::named(0, 0, 1260), Node::branch(6583, 1),
    Node::branch(6584, 1), Node::branch(6585, 1), Node::branch(6586, 1), Node::branch(6587, 1),
    Node::branch(6588, 1), Node::branch(6589, 1), Node::named(0, 0, 529), Node::branch(6590, 1),
    Node::branch(6591, 1), Node::branch(6592, 1), Node::branch(6593, 1), Node::branch(6594, 1),
    Node::branch(6595, 1), Node::branch(6596, 1), Node::branch(6597, 1), Node::branch(6598, 1),
    Node::branch(6599, 1), Node::branch(6600, 1), Node::branch(6601, 1), Node::branch(6602, 1),
    Node::branch(6603, 1), Node::branch(6604, 1), Node::branch(6605, 1), Node::branch(6606, 1),
    Node::named(0, 0, 1465), Node::named(0, 0, 552), Node::branch(6607, 1), Node::named(0, 0, 18),
    Node::named(0, 0, 1466), Node::branch(6608, 1), Node::branch(6609, 1), Node::named(0, 0, 1467),
    Node::branch(6610, 1), Node::branch(6611, 1), Node::branch(6612, 1), Node::named(0, 0, 1445),
    Node::branch(6613, 1), Node::branch(6614, 1), Node::branch(6615, 1), Node::branch(6616, 1),
    Node::branch(6617, 1), Node::branch(6618, 1), Node::branch(6619, 1), Node::branch(6620, 1),
    Node::branch(6621, 1), Node::branch(6622, 1), Node::branch(6623, 1), Node::branch(6624, 1),
    Node::branch(6625, 1), Node::branch(6626, 1), Node::branch(6627, 1), Node::named(0, 0, 501),
    Node::branch(6628, 1), Node::branch(6629, 1), Node::named(0, 0, 382), Node::branch(6630, 1),
    Node::branch(6631, 1), Node::named(0, 0, 739), Node::branch(6632, 2), Node::branch(6634, 1),
    Node::branch(6635, 1), Node::branch(6636, 1), Node::branch(6637, 1), Node::branch(6638, 1),
    Node::named(0, 0, 144), Node::branch(6639, 1), Node::branch(6640, 1), Node::branch(6641, 1),
    Node::branch(6642, 1), Node::named(0, 0, 152), Node::branch(6643, 1), Node::branch(6644, 1),
    Node::branch(6645, 1), Node::branch(6646, 1), Node::branch(6647, 1), Node::branch(6648, 1),
    Node::branch(6649, 1), Node::branch(6650, 1), Node::branch(6651, 1), Node::named(0, 0, 173),
    Node::named(0, 0, 172), Node::named(0, 0, 1184), Node::branch(6652, 1), Node::branch(6653, 1),
    Node::named(0, 0, 596), Node::branch(6654, 1), Node::branch(6655, 1), Node::branch(6656, 1),
    Node::named(0, 0, 1468), Node::named(0, 0, 1469), Node::branch(6657, 1), Node::named(0, 0, 855),
    Node::branch(6658, 1), Node::branch(6659, 1), Node::named(0, 0, 856), Node::branch(6660, 1),
    Node::branch(6661, 1), Node::branch(6662, 1), Node::named(0, 0, 866), Node::named(0, 0, 868),
    Node::branch(6663, 1), Node::branch(6664, 1), Node::named(0, 0, 521), Node::branch(6665, 1),
    Node::branch(6666, 1), Node::branch(6667, 1), Node::named(6668, 1, 533), Node::branch(6669, 1),
    Node::branch(6670, 1), Node::branch(6671, 1), Node::branch(6672, 1), Node::branch(6673, 1),
    Node::branch(6674, 1), Node::branch(6675, 1), Node::named(0, 0, 1262), Node::branch(6676, 1),
    Node::branch(6677, 1), Node::named(0, 0, 1282), Node::named(0, 0, 1283), Node::branch(6678, 1),
    Node::branch(6679, 1), Node::named(0, 0, 947), Node::named(0, 0, 545), Node::branch(6680, 1),
    Node::branch(6681, 1), Node::named(0, 0, 949), Node::branch(6682, 1), Node::branch(6683, 1),
    Node::branch(6684, 1), Node::branch(6685, 1), Node::branch(6686, 1), Node::branch(6687, 1),
    Node::branch(6688, 1), Node::branch(6689, 1), Node::branch(6690, 1), Node::named(0, 0, 976),
    Node::named(0, 0, 761), Node::named(0, 0, 758), Node::branch(6691, 1), Node::branch(6692, 1),
    Node::branch(6693, 1), Node::branch(6694, 1), Node::branch(6695, 1), Node::named(0, 0, 1233),
    Node::named(0, 0, 1237), Node::branch(6696, 1), Node::branch(6697, 1), Node::branch(6698, 1),
    Node::branch(6699, 1), Node::branch(6700, 1), Node::branch(6701, 4), Node::branch(6705, 1),
    Node::branch(6706, 1), Node::branch(6707, 1), Node::branch(6708, 1), Node::branch(6709, 1),
    Node::branch(6710, 1), Node::branch(6711, 1), Node::branch(6712, 1), Node::branch(6713, 2),
    Node::branch(6715, 1), Node::branch(6716, 1), Node::branch(6717, 1), Node::branch(6718, 1),
    Node::branch(6719, 1), Node::branch(6720, 1), Node::branch(6721, 1), Node::branch(6722, 1),
    Node::branch(6723, 1), Node::branch(6724, 1), Node::branch(6725, 1), Node::branch(6726, 1),
    Node::branch(6727, 1), Node::named(0, 0, 915), Node::branch(6728, 1), Node::branch(6729, 1),
    Node::branch(6730, 1), Node::branch(6731, 1), Node::branch(6732, 1), Node::branch(6733, 1),
    Node::named(0, 0, 25), Node::branch(6734, 1), Node::branch(6735, 1), Node::branch(6736, 1),
    Node::branch(6737, 1), Node::branch(6738, 1), Node::branch(6739, 1), Node::branch(6740, 1),
    Node::branch(6741, 1), Node::branch(6742, 1), Node::branch(6743, 1), Node::branch(6744, 1),
    Node::named(0, 0, 813), Node::branch(6745, 1), Node::branch(6746, 1), Node::branch(6747, 1),
    Node::branch(6748, 1), Node::branch(6749, 1), Node::branch(6750, 1), Node::branch(6751, 1),
    Node::branch(6752, 1), Node::branch(6753, 1), Node::branch(6754, 1), Node::branch(6755, 1),
    Node::branch(6756, 1), Node::branch(6757, 1), Node::branch(6758, 1), Node::branch(6759, 1),
    Node::named(0, 0, 32), Node::branch(6760, 1), Node::branch(6761, 1), Node::branch(6762, 1),
    Node::branch(6763, 1), Node::branch(6764, 1), Node::branch(6765, 1), Node::branch(6766, 1),
    Node::branch(6767, 1), Node::branch(6768, 1), Node::named(0, 0, 1470), Node::branch(6769, 1),
    Node::branch(6770, 2), Node::branch(6772, 1), Node::branch(6773, 1), Node::branch(6774, 1),
    Node::branch(6775, 1), Node::branch(6776, 1), Node::branch(6777, 1), Node::branch(6778, 1),
    Node::branch(6779, 1), Node::branch(6780, 1), Node::branch(6781, 1), Node::branch(6782, 1),
    Node::branch(6783, 1), Node::branch(6784, 1), Node::branch(6785, 1), Node::branch(6786, 1),
    Node::branch(6787, 1), Node::branch(6788, 1), Node::branch(6789, 1), Node::named(0, 0, 474),
    Node::branch(6790, 1), Node::branch(6791, 1), Node::branch(6792, 1), Node::branch(6793, 1),
    Node::named(6794, 2, 204), Node::branch(6796, 1), Node::branch(6797, 1), Node::branch(6798, 2),
    Node::branch(6800, 1), Node::named(6801, 3, 205), Node::named(6804, 1, 983),
    Node::branch(6805, 1), Node::branch(6806, 1), Node::branch(6807, 1), Node::branch(6808, 1),
    Node::branch(6809, 1), Node::branch(6810, 1), Node::named(0, 0, 569), Node::branch(6811, 1),
    Node::branch(6812, 1), Node::branch(6813, 1), Node::branch(6814, 1), Node::branch(6815, 1),
    Node::branch(6816, 1), Node::branch(6817, 1), Node::branch(6818, 1), Node::branch(6819, 1),
    Node::branch(6820, 1), Node::branch(6821, 1), Node::branch(6822, 1), Node::branch(6823, 1),
    Node::branch(6824, 1), Node::branch(6825, 1), Node::branch(6826, 1), Node::branch(6827, 1),
    Node::branch(6828, 1), Node::branch(6829, 1), Node::branch(6830, 1), Node::branch(6831, 1),
    Node::branch(6832, 1), Node::named(6833, 1, 913), Node::branch(6834, 1), Node::named(0, 0, 898),
    Node::named(0, 0, 1471), Node::branch(6835, 1), Node::branch(6836, 1), Node::branch(6837, 1),
    Node::branch(6838, 1), Node::named(0, 0, 1089), Node::branch(6839, 1), Node::branch(6840, 1),
    Node::branch(6841, 1), Node::named(0, 0, 943), Node::named(0, 0, 562), Node::branch(6842, 1),
    Node::branch(6843, 1), Node::branch(6844, 1), Node::branch(6845, 1), Node::branch(6846, 1),
    Node::branch(6847, 1), Node::branch(6848, 1), Node::branch(6849, 1), Node::named(0, 0, 588),
    Node::branch(6850, 1), Node::named(0, 0, 586), Node::branch(6851, 1), Node::branch(6852, 1),
    Node::named(0, 0, 188), Node::branch(6853, 1), Node::branch(6854, 1), Node::branch(6855, 1),
    Node::branch(6856, 1), Node::branch(6857, 1), Node::named(0, 0, 674), Node::branch(6858, 2),
    Node::branch(6860, 1), Node::named(0, 0, 558), Node::branch(6861, 1), Node::branch(6862, 2),
    Node::named(0, 0, 502), Node::named(0, 0, 875), Node::named(0, 0, 735), Node::named(0, 0, 736),
    Node::branch(6864, 1), Node::branch(6865, 1), Node::named(0, 0, 747), Node::branch(6866, 1),
    Node::branch(6867, 1), Node::branch(6868, 1), Node::branch(6869, 2), Node::named(0, 0, 146),
    Node::named(0, 0, 274), Node::branch(6871, 1), Node::branch(6872, 1), Node::branch(6873, 1),
    Node::branch(6874, 1), Node::branch(6875, 1), Node::branch(6876, 2), Node::branch(6878, 1),
    Node::branch(6879, 1), Node::branch(6880, 1), Node::branch(6881, 1), Node::branch(6882, 1),
    Node::branch(6883, 1), Node::branch(6884, 1), Node::branch(6885, 1), Node::branch(6886, 1),
    Node::branch(6887, 1), Node::branch(6888, 1), Node::branch(6889, 1), Node::named(0, 0, 862),
    Node::branch(6890, 1), Node::named(0, 0, 863), Node::branch(6891, 1), Node::branch(6892, 1),
    Node::branch(6893, 1), Node::named(0, 0, 893), Node::named(0, 0, 895), Node::named(0, 0, 283),
    Node::branch(6894, 1), Node::branch(6895, 1), Node::branch(6896, 1), Node::branch(6897, 1),
    Node::branch(6898, 1), Node::branch(6899, 1), Node::branch(6900, 1), Node::branch(6901, 1),
    Node::branch(6902, 1), Node::branch(6903, 1), Node::branch(6904, 1), Node::named(0, 0, 518),
    Node::named(0, 0, 926), Node::named(0, 0, 928), Node::named(0, 0, 18), Node::branch(6905, 1),
    Node::branch(6906, 1), Node::branch(6907, 1), Node::branch(6908, 1), Node::branch(6909, 1),
    Node::named(0, 0, 588), Node::branch(6910, 1), Node::branch(6911, 1), Node::branch(6912, 1),
    Node::branch(6913, 1), Node::branch(6914, 2), Node::branch(6916, 1), Node::branch(6917, 1),
    Node::branch(6918, 1), Node::branch(6919, 1), Node::branch(6920, 1), Node::branch(6921, 1),
    Node::branch(6922, 1), Node::branch(6923, 1), Node::branch(6924, 1), Node::branch(6925, 1),
    Node::branch(6926, 1), Node::branch(6927, 1), Node::branch(6928, 1), Node::branch(6929, 1),
    Node::branch(6930, 1), Node::branch(6931, 1), Node::branch(6932, 1), Node::branch(6933, 1),
    Node::branch(6934, 1), Node::branch(6935, 1), Node::branch(6936, 1), Node::branch(6937, 1),
    Node::branch(6938, 1), Node::branch(6939, 1), Node::named(0, 0, 1472), Node::branch(6940, 1),
    Node::branch(6941, 1), Node::branch(6942, 1), Node::branch(6943, 1), Node::branch(6944, 1),
    Node::branch(6945, 1), Node::named(0, 0, 1468), Node::branch(6946, 1), Node::branch(6947, 1),
    Node::named(0, 0, 20), Node::branch(6948, 1), Node::branch(6949, 1), Node::named(6950, 1, 24),
    Node::branch(6951, 1), Node::branch(6952, 1), Node::branch(6953, 1), Node::named(0, 0, 425),
    Node::named(0, 0, 284), Node::branch(6954, 1), Node::named(0, 0, 374), Node::named(0, 0, 594),
    Node::branch(6955, 1), Node::branch(6956, 1), Node::branch(6957, 1), Node::named(0, 0, 808),
    Node::branch(6958, 1), Node::branch(6959, 1), Node::branch(6960, 1), Node::branch(6961, 1),
    Node::branch(6962, 1), Node::branch(6963, 1), Node::named(0, 0, 1469), Node::branch(6964, 1),
    Node::named(6965, 2, 981), Node::branch(6967, 1), Node::branch(6968, 1),
    Node::named(6969, 1, 965), Node::branch(6970, 1), Node::branch(6971, 1), Node::branch(6972, 1),
    Node::branch(6973, 1), Node::branch(6974, 1), Node::branch(6975, 1), Node::branch(6976, 1),
    Node::branch(6977, 1), Node::branch(6978, 1), Node::branch(6979, 1), Node::branch(6980, 1),
    Node::branch(6981, 1), Node::branch(6982, 1), Node::branch(6983, 1), Node::branch(6984, 1),
    Node::branch(6985, 1), Node::branch(6986, 1), Node::branch(6987, 1), Node::branch(6988, 1),
    Node::branch(6989, 1), Node::named(0, 0, 1210), Node::branch(6990, 1), Node::branch(6991, 1),
    Node::branch(6992, 1), Node::branch(6993, 1), Node::branch(6994, 1), Node::branch(6995, 1),
    Node::branch(6996, 1), Node::branch(6997, 1), Node::branch(6998, 1), Node::named(0, 0, 1206),
    Node::branch(6999, 1), Node::named(0, 0, 201), Node::branch(7000, 1), Node::branch(7001, 1),
    Node::named(0, 0, 857), Node::branch(7002, 1), Node::branch(7003, 1), Node::branch(7004, 1),
    Node::branch(7005, 1), Node::branch(7006, 1), Node::branch(7007, 1), Node::branch(7008, 1),
    Node::branch(7009, 1), Node::branch(7010, 1), Node::branch(7011, 1), Node::branch(7012, 1),
    Node::branch(7013, 1), Node::branch(7014, 1), Node::branch(7015, 1), Node::branch(7016, 1),
    Node::branch(7017, 1), Node::branch(7018, 1), Node::branch(7019, 1), Node::branch(7020, 1),
    Node::branch(7021, 1), Node::branch(7022, 1), Node::branch(7023, 1), Node::branch(7024, 1),
    Node::branch(7025, 1), Node::named(0, 0, 524), Node::branch(7026, 1), Node::branch(7027, 1),
    Node::branch(7028, 1), Node::branch(7029, 1), Node::branch(7030, 1), Node::branch(7031, 1),
    Node::named(0, 0, 910), Node::branch(7032, 1), Node::branch(7033, 1), Node::branch(7034, 1),
    Node::branch(7035, 1), Node::branch(7036, 1), Node::branch(7037, 1), Node::branch(7038, 1),
    Node::branch(7039, 1), Node::branch(7040, 1), Node::branch(7041, 1), Node::named(0, 0, 1473),
    Node::branch(7042, 1), Node::branch(7043, 1), Node::branch(7044, 1), Node::named(0, 0, 580),
    Node::branch(7045, 1), Node::named(7046, 1, 944), Node::branch(7047, 1), Node::branch(7048, 1),
    Node::branch(7049, 1), Node::branch(7050, 1), Node::branch(7051, 1), Node::branch(7052, 1),
    Node::named(0, 0, 361), Node::branch(7053, 1), Node::branch(7054, 1), Node::branch(7055, 1),
    Node::branch(7056, 1), Node::branch(7057, 1), Node::named(0, 0, 589), Node::branch(7058, 1),
    Node::branch(7059, 1), Node::branch(7060, 1), Node::branch(7061, 1), Node::branch(7062, 1),
    Node::branch(7063, 1), Node::named(0, 0, 458), Node::branch(7064, 1), Node::branch(7065, 1),
    Node::branch(7066, 1), Node::branch(7067, 1), Node::branch(7068, 1), Node::branch(7069, 1),
    Node::branch(7070, 1), Node::branch(7071, 1), Node::branch(7072, 1), Node::branch(7073, 1),
    Node::named(0, 0, 20), Node::branch(7074, 1), Node::branch(7075, 1), Node::branch(7076, 1),
    Node::branch(7077, 1), Node::branch(7078, 1), Node::branch(7079, 1), Node::branch(7080, 1),
    Node::branch(7081, 1), Node::branch(7082, 1), Node::branch(7083, 1), Node::branch(7084, 1),
    Node::branch(7085, 1), Node::branch(7086, 1), Node::branch(7087, 1), Node::branch(7088, 1),
    Node::branch(7089, 1), Node::branch(7090, 1), Node::branch(7091, 1), Node::branch(7092, 1),
    Node::branch(7093, 1), Node::branch(7094, 1), Node::branch(7095, 1), Node::branch(7096, 1),
    Node::branch(7097, 2), Node::branch(7099, 1), Node::branch(7100, 1), Node::branch(7101, 1),
    Node::branch(7102, 1), Node::branch(7103, 1), Node::named(0, 0, 763), Node::branch(7104, 1),
    Node::branch(7105, 1), Node::branch(7106, 1), Node::named(0, 0, 399), Node::named(7107, 1, 464),
    Node::branch(7108, 1), Node::branch(7109, 1), Node::branch(7110, 1), Node::branch(7111, 1),
    Node::branch(7112, 1), Node::named(7113, 1, 1322), Node::named(7114, 1, 1324),
    Node::branch(7115, 1), Node::branch(7116, 1), Node::named(0, 0, 17), Node::branch(7117, 1),
    Node::branch(7118, 1), Node::branch(7119, 1), Node::branch(7120, 1), Node::branch(7121, 1),
    Node::branch(7122, 1), Node::branch(7123, 1), Node::branch(7124, 2), Node::branch(7126, 1),
    Node::branch(7127, 1), Node::named(0, 0, 19), Node::branch(7128, 1), Node::branch(7129, 1),
    Node::branch(7130, 1), Node::branch(7131, 1), Node::named(0, 0, 622), Node::branch(7132, 1),
    Node::branch(7133, 1), Node::branch(7134, 1), Node::branch(7135, 1), Node::named(0, 0, 578),
    Node::branch(7136, 1), Node::branch(7137, 1), Node::branch(7138, 1), Node::branch(7139, 1),
    Node::branch(7140, 1), Node::branch(7141, 1), Node::branch(7142, 1), Node::branch(7143, 1),
    Node::branch(7144, 1), Node::branch(7145, 1), Node::branch(7146, 1), Node::branch(7147, 1),
    Node::branch(7148, 1), Node::branch(7149, 1), Node::branch(7150, 1), Node::branch(7151, 1),
    Node::branch(7152, 1), Node::branch(7153, 1), Node::branch(7154, 1), Node::branch(7155, 1),
    Node::branch(7156, 1), Node::branch(7157, 1), Node::branch(7158, 1), Node::branch(7159, 1),
    Node::branch(7160, 1), Node::branch(7161, 1), Node::named(0, 0, 1474), Node::branch(7162, 1),
    Node::branch(7163, 1), Node::branch(7164, 1), Node::branch(7165, 1), Node::branch(7166, 1),
    Node::named(0, 0, 1475), Node::branch(7167, 1), Node::branch(7168, 1), Node::named(0, 0, 30),
    Node::branch(7169, 1), Node::named(0, 0, 991), Node::branch(7170, 1), Node::branch(7171, 1),
    Node::named(0, 0, 990), Node::branch(7172, 1), Node::branch(7173, 1), Node::branch(7174, 1),
    Node::branch(7175, 1), Node::branch(7176, 1), Node::branch(7177, 1), Node::branch(7178, 1),
    Node::branch(7179, 1), Node::branch(7180, 1), Node::branch(7181, 1), Node::branch(7182, 1),
    Node::branch(7183, 1), Node::named(0, 0, 850), Node::branch(7184, 1), Node::branch(7185, 1),
    Node::branch(7186, 1), Node::branch(7187, 1), Node::branch(7188, 1), Node::branch(7189, 1),
    Node::branch(7190, 1), Node::branch(7191, 1), Node::branch(7192, 1), Node::branch(7193, 1),
    Node::branch(7194, 1), Node::branch(7195, 1), Node::branch(7196, 1), Node::branch(7197, 1),
    Node::branch(7198, 1), Node::branch(7199, 1), Node::branch(7200, 1), Node::branch(7201, 1),
    Node::branch(7202, 1), Node::branch(7203, 1), Node::branch(7204, 1), Node::branch(7205, 1),
    Node::branch(7206, 1), Node::named(0, 0, 865), Node::branch(7207, 1), Node::named(0, 0, 193),
    Node::branch(7208, 1), Node::branch(7209, 1), Node::branch(7210, 1), Node::branch(7211, 1),
    Node::named(0, 0, 72), Node::named(0, 0, 220), Node::branch(7212, 1), Node::named(0, 0, 896),
    Node::branch(7213, 1), Node::branch(7214, 1), Node::branch(7215, 1), Node::branch(7216, 1),
    Node::named(0, 0, 903), Node::branch(7217, 1), Node::branch(7218, 1), Node::branch(7219, 1),
    Node::branch(7220, 1), Node::named(0, 0, 184), Node::branch(7221, 1), Node::named(7222, 2, 984),
    Node::branch(7224, 1), Node::branch(7225, 1), Node::named(7226, 1, 966), Node::branch(7227, 1),
    Node::branch(7228, 1), Node::branch(7229, 1), Node::branch(7230, 1), Node::branch(7231, 1),
    Node::branch(7232, 1), Node::branch(7233, 1), Node::named(0, 0, 228), Node::branch(7234, 1),
    Node::named(0, 0, 929), Node::named(0, 0, 568), Node::branch(7235, 1), Node::branch(7236, 1),
    Node::branch(7237, 1), Node::named(0, 0, 964), Node::branch(7238, 1), Node::branch(7239, 1),
    Node::branch(7240, 1), Node::named(0, 0, 46), Node::named(0, 0, 1146), Node::branch(7241, 1),
    Node::branch(7242, 1), Node::named(0, 0, 995), Node::named(7243, 3, 975), Node::branch(7246, 1),
    Node::branch(7247, 1), Node::branch(7248, 1), Node::branch(7249, 1), Node::named(0, 0, 1103),
    Node::branch(7250, 1), Node::branch(7251, 1), Node::branch(7252, 1), Node::branch(7253, 1),
    Node::named(0, 0, 756), Node::named(0, 0, 1170), Node::branch(7254, 1), Node::named(0, 0, 1173),
    Node::branch(7255, 1), Node::named(0, 0, 817), Node::branch(7256, 1), Node::branch(7257, 1),
    Node::branch(7258, 1), Node::branch(7259, 1), Node::branch(7260, 1), Node::named(0, 0, 991),
    Node::branch(7261, 1), Node::branch(7262, 1), Node::named(0, 0, 1171), Node::branch(7263, 1),
    Node::named(0, 0, 1069), Node::branch(7264, 1), Node::branch(7265, 1), Node::branch(7266, 1),
    Node::named(7267, 1, 858), Node::branch(7268, 1), Node::branch(7269, 1), Node::branch(7270, 1),
    Node::branch(7271, 1), Node::branch(7272, 1), Node::branch(7273, 1), Node::branch(7274, 1),
    Node::branch(7275, 1), Node::branch(7276, 1), Node::named(0, 0, 214), Node::named(0, 0, 934),
    Node::branch(7277, 1), Node::branch(7278, 1), Node::named(7279, 1, 544), Node::branch(7280, 1),
    Node::branch(7281, 1), Node::named(0, 0, 965), Node::branch(7282, 1), Node::named(0, 0, 1321),
    Node::named(0, 0, 1323), Node::branch(7283, 1), Node::branch(7284, 1), Node::branch(7285, 1),
    Node::branch(7286, 1), Node::branch(7287, 1), Node::branch(7288, 1), Node::branch(7289, 1),
    Node::branch(7290, 1), Node::branch(7291, 1), Node::named(0, 0, 141), Node::branch(7292, 1),
    Node::branch(7293, 1), Node::branch(7294, 1), Node::branch(7295, 1), Node::branch(7296, 1),
    Node::branch(7297, 1), Node::branch(7298, 1), Node::branch(7299, 2), Node::branch(7301, 1),
    Node::branch(7302, 1), Node::named(0, 0, 978), Node::branch(7303, 1), Node::branch(7304, 1),
    Node::branch(7305, 1), Node::branch(7306, 1), Node::branch(7307, 1), Node::named(7308, 1, 816),
    Node::branch(7309, 1), Node::branch(7310, 1), Node::branch(7311, 1), Node::branch(7312, 1),
    Node::branch(7313, 1), Node::branch(7314, 1), Node::branch(7315, 1), Node::branch(7316, 1),
    Node::named(0, 0, 1476), Node::branch(7317, 1), Node::named(0, 0, 368), Node::named(0, 0, 26),
    Node::named(0, 0, 29), Node::branch(7318, 1), Node::branch(7319, 1), Node::branch(7320, 1),
    Node::branch(7321, 1), Node::named(7322, 1, 745), Node::named(0, 0, 429), Node::branch(7323, 1),
    Node::branch(7324, 1), Node::branch(7325, 1), Node::branch(7326, 1), Node::branch(7327, 1),
    Node::branch(7328, 1), Node::named(0, 0, 165), Node::branch(7329, 1), Node::named(0, 0, 177),
    Node::branch(7330, 1), Node::named(0, 0, 994), Node::branch(7331, 1), Node::named(0, 0, 993),
    Node::named(0, 0, 952), Node::branch(7332, 1), Node::branch(7333, 1), Node::branch(7334, 1),
    Node::branch(7335, 1), Node::branch(7336, 1), Node::branch(7337, 1), Node::named(0, 0, 7),
    Node::branch(7338, 1), Node::branch(7339, 1), Node::branch(7340, 1), Node::branch(7341, 1),
    Node::branch(7342, 1), Node::named(0, 0, 494), Node::branch(7343, 1), Node::branch(7344, 1),
    Node::branch(7345, 1), Node::branch(7346, 1), Node::named(0, 0, 495), Node::branch(7347, 1),
    Node::branch(7348, 1), Node::branch(7349, 1), Node::branch(7350, 1), Node::branch(7351, 1),
    Node::branch(7352, 1), Node::branch(7353, 1), Node::branch(7354, 1), Node::branch(7355, 1),
    Node::named(0, 0, 867), Node::branch(7356, 1), Node::branch(7357, 1), Node::branch(7358, 1),
    Node::branch(7359, 1), Node::branch(7360, 1), Node::named(0, 0, 485), Node::branch(7361, 1),
    Node::named(0, 0, 831), Node::branch(7362, 1), Node::branch(7363, 1), Node::named(0, 0, 36),
    Node::branch(7364, 1), Node::branch(7365, 1), Node::branch(7366, 1), Node::branch(7367, 1),
    Node::branch(7368, 1), Node::branch(7369, 1), Node::branch(7370, 1), Node::named(0, 0, 1477),
    Node::branch(7371, 1), Node::branch(7372, 1), Node::branch(7373, 1), Node::branch(7374, 1),
    Node::branch(7375, 1), Node::named(0, 0, 1478), Node::named(0, 0, 391), Node::named(0, 0, 449),
    Node::branch(7376, 1), Node::branch(7377, 1), Node::branch(7378, 1), Node::named(7379, 1, 945),
    Node::branch(7380, 1), Node::named(0, 0, 383), Node::branch(7381, 1), Node::branch(7382, 1),
    Node::named(0, 0, 873), Node::branch(7383, 1), Node::branch(7384, 1), Node::named(0, 0, 1479),
    Node::branch(7385, 1), Node::branch(7386, 1), Node::branch(7387, 1), Node::branch(7388, 1),
    Node::branch(7389, 1), Node::branch(7390, 1), Node::named(0, 0, 1092), Node::branch(7391, 1),
    Node::named(0, 0, 1002), Node::named(0, 0, 743), Node::branch(7392, 1), Node::branch(7393, 1),
    Node::named(0, 0, 1252), Node::branch(7394, 1), Node::named(0, 0, 819),
    Node::named(7395, 1, 429), Node::branch(7396, 1), Node::branch(7397, 1),
    Node::named(0, 0, 1192), Node::branch(7398, 1), Node::named(0, 0, 994), Node::named(0, 0, 1253),
    Node::branch(7399, 1), Node::branch(7400, 1), Node::named(0, 0, 487), Node::branch(7401, 1),
    Node::named(7402, 1, 864), Node::named(0, 0, 1255), Node::branch(7403, 1),
    Node::named(0, 0, 913), Node::branch(7404, 1), Node::branch(7405, 1), Node::branch(7406, 1),
    Node::branch(7407, 1), Node::branch(7408, 1), Node::branch(7409, 1), Node::named(0, 0, 834),
    Node::branch(7410, 1), Node::branch(7411, 1), Node::branch(7412, 1), Node::named(0, 0, 966),
    Node::branch(7413, 1), Node::branch(7414, 1), Node::branch(7415, 1), Node::branch(7416, 1),
    Node::branch(7417, 1), Node::named(0, 0, 922), Node::named(0, 0, 506), Node::branch(7418, 1),
    Node::branch(7419, 1), Node::branch(7420, 1), Node::branch(7421, 1), Node::branch(7422, 1),
    Node::branch(7423, 1), Node::named(0, 0, 389), Node::named(0, 0, 446), Node::branch(7424, 1),
    Node::branch(7425, 1), Node::branch(7426, 1), Node::branch(7427, 1), Node::branch(7428, 1),
    Node::branch(7429, 1), Node::branch(7430, 1), Node::branch(7431, 1), Node::branch(7432, 1),
    Node::branch(7433, 1), Node::branch(7434, 1), Node::branch(7435, 1), Node::named(7436, 1, 912),
    Node::branch(7437, 1), Node::branch(7438, 1), Node::branch(7439, 1), Node::branch(7440, 1),
    Node::branch(7441, 1), Node::branch(7442, 1), Node::branch(7443, 1), Node::branch(7444, 1),
    Node::branch(7445, 1), Node::branch(7446, 1), Node::branch(7447, 1), Node::branch(7448, 1),
    Node::named(0, 0, 1480), Node::named(0, 0, 1481), Node::branch(7449, 1), Node::branch(7450, 1),
    Node::named(0, 0, 1482), Node::named(0, 0, 1483), Node::branch(7451, 1), Node::branch(7452, 1),
    Node::branch(7453, 1), Node::named(0, 0, 933), Node::branch(7454, 1), Node::branch(7455, 1),
    Node::branch(7456, 1), Node::branch(7457, 1), Node::branch(7458, 1), Node::branch(7459, 1),
    Node::branch(7460, 1), Node::named(0, 0, 197), Node::branch(7461, 1), Node::branch(7462, 1),
    Node::branch(7463, 1), Node::named(0, 0, 851), Node::named(0, 0, 844),
    Node::named(7464, 2, 858), Node::branch(7466, 1), Node::branch(7467, 1), Node::branch(7468, 1),
    Node::branch(7469, 1), Node::branch(7470, 1), Node::branch(7471, 1), Node::branch(7472, 1),
    Node::named(7473, 1, 1484), Node::branch(7474, 1), Node::branch(7475, 1), Node::branch(7476, 1),
    Node::branch(7477, 1), Node::branch(7478, 1), Node::branch(7479, 1), Node::branch(7480, 1),
    Node::named(0, 0, 1485), Node::branch(7481, 1), Node::branch(7482, 1), Node::branch(7483, 1),
    Node::branch(7484, 1), Node::branch(7485, 1), Node::branch(7486, 1), Node::branch(7487, 1),
    Node::named(7488, 1, 746), Node::branch(7489, 1), Node::branch(7490, 1), Node::branch(7491, 1),
    Node::branch(7492, 1), Node::branch(7493, 1), Node::named(0, 0, 533), Node::branch(7494, 1),
    Node::branch(7495, 1), Node::branch(7496, 1), Node::branch(7497, 1), Node::branch(7498, 1),
    Node::branch(7499, 1), Node::named(0, 0, 848), Node::branch(7500, 1), Node::named(0, 0, 987),
    Node::branch(7501, 1), Node::branch(7502, 1), Node::branch(7503, 1), Node::named(0, 0, 879),
    Node::branch(7504, 1), Node::named(0, 0, 1096), Node::named(0, 0, 745), Node::branch(7505, 1),
    Node::named(0, 0, 816), Node::named(0, 0, 826), Node::branch(7506, 1), Node::branch(7507, 1),
    Node::branch(7508, 1), Node::named(0, 0, 852), Node::named(0, 0, 853), Node::named(0, 0, 1212),
    Node::branch(7509, 1), Node::branch(7510, 1), Node::named(0, 0, 914), Node::branch(7511, 1),
    Node::branch(7512, 1), Node::named(0, 0, 905), Node::named(0, 0, 1266), Node::named(0, 0, 761),
    Node::named(0, 0, 923), Node::branch(7513, 1), Node::branch(7514, 1), Node::named(0, 0, 981),
    Node::branch(7515, 1), Node::branch(7516, 1), Node::branch(7517, 1), Node::branch(7518, 1),
    Node::branch(7519, 1), Node::named(0, 0, 662), Node::branch(7520, 1), Node::named(0, 0, 779),
    Node::named(0, 0, 956), Node::branch(7521, 1), Node::branch(7522, 1), Node::branch(7523, 1),
    Node::branch(7524, 1), Node::branch(7525, 1), Node::named(0, 0, 529), Node::branch(7526, 1),
    Node::branch(7527, 1), Node::named(0, 0, 752), Node::branch(7528, 1), Node::branch(7529, 1),
    Node::branch(7530, 1), Node::branch(7531, 1), Node::branch(7532, 1), Node::named(0, 0, 1486),
    Node::branch(7533, 1), Node::branch(7534, 1), Node::branch(7535, 1), Node::named(0, 0, 155),
    Node::named(0, 0, 23), Node::branch(7536, 1), Node::named(0, 0, 448), Node::branch(7537, 1),
    Node::branch(7538, 1), Node::branch(7539, 1), Node::branch(7540, 1), Node::branch(7541, 1),
    Node::named(0, 0, 1487), Node::named(0, 0, 176), Node::branch(7542, 1), Node::branch(7543, 1),
    Node::branch(7544, 1), Node::branch(7545, 1), Node::branch(7546, 1), Node::branch(7547, 1),
    Node::branch(7548, 1), Node::named(0, 0, 477), Node::branch(7549, 1), Node::branch(7550, 1),
    Node::branch(7551, 1), Node::branch(7552, 1), Node::branch(7553, 1), Node::branch(7554, 1),
    Node::branch(7555, 1), Node::branch(7556, 1), Node::branch(7557, 1), Node::named(0, 0, 488),
    Node::branch(7558, 1), Node::branch(7559, 1), Node::named(7560, 2, 864), Node::branch(7562, 1),
    Node::branch(7563, 1), Node::named(0, 0, 489), Node::branch(7564, 1), Node::named(0, 0, 1488),
    Node::named(0, 0, 869), Node::branch(7565, 1), Node::branch(7566, 1), Node::branch(7567, 1),
    Node::branch(7568, 1), Node::branch(7569, 1), Node::branch(7570, 1), Node::branch(7571, 1),
    Node::branch(7572, 1), Node::branch(7573, 1), Node::branch(7574, 1), Node::named(0, 0, 1489),
    Node::branch(7575, 1), Node::branch(7576, 1), Node::named(0, 0, 1490), Node::named(0, 0, 1491),
    Node::branch(7577, 1), Node::branch(7578, 1), Node::branch(7579, 1), Node::branch(7580, 1),
    Node::named(0, 0, 1492), Node::named(0, 0, 963), Node::branch(7581, 1), Node::branch(7582, 1),
    Node::branch(7583, 1), Node::branch(7584, 1), Node::named(0, 0, 886), Node::named(0, 0, 746),
    Node::branch(7585, 1), Node::branch(7586, 1), Node::branch(7587, 1), Node::named(0, 0, 1218),
    Node::named(0, 0, 912), Node::branch(7588, 1), Node::named(0, 0, 921), Node::named(0, 0, 300),
    Node::branch(7589, 1), Node::named(0, 0, 984), Node::branch(7590, 1), Node::branch(7591, 1),
    Node::branch(7592, 1), Node::branch(7593, 1), Node::branch(7594, 1), Node::branch(7595, 1),
    Node::branch(7596, 1), Node::branch(7597, 1), Node::branch(7598, 1), Node::branch(7599, 1),
    Node::named(0, 0, 586), Node::named(0, 0, 214), Node::branch(7600, 1), Node::named(0, 0, 1493),
    Node::named(0, 0, 1494), Node::branch(7601, 1), Node::branch(7602, 1), Node::branch(7603, 1),
    Node::named(0, 0, 1495), Node::branch(7604, 1), Node::named(0, 0, 156), Node::branch(7605, 1),
    Node::named(0, 0, 824), Node::named(0, 0, 1496), Node::named(0, 0, 1497),
    Node::named(0, 0, 834), Node::branch(7606, 1), Node::branch(7607, 1), Node::branch(7608, 1),
    Node::branch(7609, 1), Node::named(0, 0, 1479), Node::branch(7610, 1), Node::branch(7611, 1),
    Node::branch(7612, 1), Node::branch(7613, 1), Node::named(0, 0, 473), Node::branch(7614, 1),
    Node::branch(7615, 1), Node::branch(7616, 1), Node::named(0, 0, 484), Node::branch(7617, 1),
    Node::named(0, 0, 1498), Node::branch(7618, 1), Node::named(0, 0, 860), Node::branch(7619, 1),
    Node::branch(7620, 1), Node::branch(7621, 1), Node::named(7622, 1, 1499), Node::branch(7623, 1),
    Node::named(0, 0, 845), Node::branch(7624, 1), Node::branch(7625, 1), Node::branch(7626, 1),
    Node::branch(7627, 1), Node::named(0, 0, 532), Node::branch(7628, 1), Node::branch(7629, 1),
    Node::branch(7630, 1), Node::branch(7631, 1), Node::branch(7632, 1), Node::named(0, 0, 1500),
    Node::branch(7633, 1), Node::named(0, 0, 1282), Node::branch(7634, 1), Node::branch(7635, 1),
    Node::named(0, 0, 1501), Node::named(0, 0, 751), Node::named(0, 0, 835), Node::branch(7636, 1),
    Node::named(0, 0, 827), Node::branch(7637, 1), Node::branch(7638, 1), Node::named(0, 0, 915),
    Node::named(0, 0, 317), Node::branch(7639, 1), Node::branch(7640, 1), Node::branch(7641, 1),
    Node::branch(7642, 1), Node::branch(7643, 1), Node::branch(7644, 1), Node::branch(7645, 1),
    Node::branch(7646, 1), Node::branch(7647, 1), Node::branch(7648, 1), Node::branch(7649, 1),
    Node::named(0, 0, 1502), Node::named(0, 0, 1503), Node::branch(7650, 1), Node::branch(7651, 1),
    Node::branch(7652, 1), Node::named(0, 0, 989), Node::named(0, 0, 988), Node::branch(7653, 1),
    Node::named(0, 0, 1479), Node::branch(7654, 1), Node::branch(7655, 1), Node::branch(7656, 1),
    Node::branch(7657, 1), Node::branch(7658, 1), Node::named(0, 0, 1504), Node::branch(7659, 1),
    Node::branch(7660, 1), Node::branch(7661, 1), Node::branch(7662, 1), Node::branch(7663, 1),
    Node::branch(7664, 1), Node::branch(7665, 1), Node::branch(7666, 1), Node::branch(7667, 1),
    Node::named(0, 0, 893), Node::named(0, 0, 827), Node::branch(7668, 1), Node::branch(7669, 1),
    Node::named(0, 0, 919), Node::named(0, 0, 1505), Node::named(0, 0, 1506),
    Node::named(0, 0, 923), Node::named(0, 0, 942), Node::branch(7670, 1), Node::named(0, 0, 926),
    Node::named(0, 0, 924), Node::branch(7671, 1), Node::named(0, 0, 989), Node::branch(7672, 1),
    Node::branch(7673, 1), Node::branch(7674, 1), Node::branch(7675, 1), Node::branch(7676, 1),
    Node::branch(7677, 1), Node::branch(7678, 1), Node::named(0, 0, 990), Node::branch(7679, 1),
    Node::branch(7680, 1), Node::named(0, 0, 1507), Node::branch(7681, 1), Node::branch(7682, 1),
    Node::named(0, 0, 826), Node::named(0, 0, 1479), Node::branch(7683, 1), Node::branch(7684, 1),
    Node::branch(7685, 1), Node::named(0, 0, 196), Node::branch(7686, 1), Node::branch(7687, 1),
    Node::branch(7688, 1), Node::branch(7689, 1), Node::named(0, 0, 1508), Node::branch(7690, 1),
    Node::branch(7691, 1), Node::branch(7692, 1), Node::branch(7693, 1), Node::branch(7694, 1),
    Node::branch(7695, 1), Node::named(0, 0, 914), Node::named(0, 0, 1283), Node::named(0, 0, 784),
    Node::named(0, 0, 0), Node::branch(7696, 1), Node::branch(7697, 1), Node::branch(7698, 1),
    Node::branch(7699, 1), Node::branch(7700, 1), Node::named(0, 0, 165), Node::branch(7701, 1),
    Node::named(0, 0, 993), Node::named(0, 0, 1509), Node::branch(7702, 1), Node::branch(7703, 1),
    Node::named(0, 0, 3), Node::named(0, 0, 487), Node::named(0, 0, 480), Node::named(0, 0, 1212),
    Node::branch(7704, 1), Node::branch(7705, 1), Node::branch(7706, 1), Node::named(0, 0, 1374),
    Node::branch(7707, 1), Node::branch(7708, 1), Node::named(0, 0, 814), Node::named(0, 0, 753),
    Node::branch(7709, 1), Node::named(0, 0, 911), Node::branch(7710, 1), Node::branch(7711, 1),
    Node::named(0, 0, 1007), Node::branch(7712, 1), Node::named(0, 0, 558), Node::named(0, 0, 1479),
    Node::branch(7713, 1), Node::named(0, 0, 1215), Node::named(0, 0, 1218), Node::branch(7714, 1),
    Node::named(0, 0, 1219), Node::branch(7715, 1), Node::branch(7716, 1), Node::named(0, 0, 742),
    Node::branch(7717, 1), Node::branch(7718, 1), Node::named(0, 0, 1375), Node::branch(7719, 1),
    Node::branch(7720, 1), Node::branch(7721, 1), Node::named(0, 0, 1510), Node::named(0, 0, 1433),
    Node::branch(7722, 1), Node::named(0, 0, 988), Node::branch(7723, 1), Node::branch(7724, 1),
    Node::branch(7725, 1), Node::branch(7726, 1), Node::branch(7727, 1), Node::branch(7728, 1),
    Node::named(0, 0, 1427),
];

pub(super) static LABELS: &[u8; 7729] = b"\
    \0ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyzEMabcfglmnoprstuaceforsuHOacdefhilorsuDJSZa\
    cefiosNTacdfglmopqstuxcfiosJTabcdfgorstAacfiosuEJOacdfgmnostucfosuHJacfosJTaceflmostacefiosuJace\
    fostuEacdfgmoprstuvacfhilorsUfosBEacefhiorsuHOacfhimoqstuHRSacfhiorsabcdfgmnoprstuDbcdefosvcefos\
    fiosAIUacfosuHacdefosabcefglmnoprstuwNabcdefiklnoprsuacdefhilorstuwyAHabcdefhijlorstuwzDacdefglm\
    nopqrstuxacefijlnoprsEabcdefgijlnorstvAabcefkosyacefgijmnopqstucfmosuacfghjosABEHabcdefghjlmnopr\
    stuvDacdefhilnopsuGLRVabcdefghijlmoprstuvwSacdefghilmoprstuvacefhilmorsufiopsuABHabcdefhilmnoprs\
    tuxabcdefhilmopqrstuwzabcdefhioprswAHabcdfghlmoprstuwABDacdeflnoprszcefoprscdfhilmnorsuvwacefios\
    uacdefhioswlPcriyrrpadgppicsimcrycrtrpecmcPcpyaeioodnrirolnpuocpocccgrsaylrafptuwctGHcaiyorreapg\
    psuciamipyrlpruccmreiyorpecRctirlprctmclcciyorraptvgptcikmiyrpcekccpeyrpcccmnpraeyfsreinpwchtpyd\
    lrnpcccaeygswrBnptcilciybrraeipeclimeryriuipeiociOrpcaGcnraeyvrogpuichlCcFcaeiyrogaprucabcmpOAHc\
    buaeyreilpictcrriybrradigpADETadpsicimaayaerrpcdidrpcrpccccciyrpcmccayortrpccrEdiuylrrepapdggpEa\
    eiopictyimciocrroyqcmprtrgaakoeoptwxrevceiolmcpraeiuodmnrceirulmnpaocuddelprvwcilraglrsklayaoglm\
    iraaegsvcclptuwbccotdrahaciDocsaioyoDrrsilsapsgsgpalscsuvDacdiahmrciplymilrllaltopraaoclcmpriyol\
    qsrgmcEajEaespacicdlqrenrilmraialrrsamoprcltbpciycxfrrinolaopcfotcgptruciikmiyrapcekpeyrrccpcart\
    agacegmnpqrtabraeuycqrsfgqsilrEabcachtioEaesabnoptwzaachmtachiqtcdhilqrrenDclproyaarocdncdpdpctl\
    mgteltiDdbcnptsuaeouyaAadqsxrEestAapsvcAEadestiptaorAaitchimpqugilrmDHadgilrsAancsiyabioslcrortb\
    mnacitaeipaeladiosvcloimbryrrimotvauipuEaceinosucinrnprcaeoartaacdenqrtabraeuyclqsacgilraognsahm\
    omabptapaachqhirlcqEaceinpsyoAacmstxracoygmaaeitflpacsuacemtarbcmnpAanlruraeyolreikolmnepsraipch\
    tioracrriyabhirrabctalgpadhlsucitcdiramaraanryaelrrtsprtcuiidirpecaiutrAaAaaidptAacqpteeciynrcpc\
    cmcayoetrcgpcjniuerahcoflnrillkvwanafvrpyYuilrdrntitccsogitfrnsrCtyyygrhrtcmffDEbnrrurrtamctofia\
    irmlsolfArrymedrtfarDerbfirrpyiyurtacgleiofarlclrfrrcyypdfryubglrrdtsfdgferrilufryurdatLrBfCDEGH\
    LNPRSTVrliurlacgcfnralmlrtsnfcmdprTfrrugrrdehfngreHyTurdrrmlftarrschesRDcyrdrtcndfprrurcerlaceoo\
    froqeroeinrllsrsbtyfrargfrfryyyurfrlyurtoafruertiafphcladsvelmrszofcdsrnrmllontkvwknuapsnahwcost\
    uvwrcn13cqtfttDHUVbdhmptuvivbrmmllpuabcdseoprdrptiptycEcefmsbompgifryrsrbpoapsabcdosalrveeoncrrg\
    erhaargrttpsrmaiioyorlfempsbnkorrylroiranygotutrrltoadndctppofruiioilaeiporromlolseolaliliitinff\
    akrcswrumertqscdleypqifvrmcioPuadelsrErrfidrrrrlcewrtkfbraruhurycainfticgtfeaidcelpyofaoernlclrt\
    frrcpdeyyfrrrarrumrbguraerrakrdibauduhtqscdgssorlyroardupqinrrgpafliabefrroarqrmburciormauPidurE\
    oretskmssracduprlefrptavfvgaalugEiopupmprdnpsrroueiiqsirrradyrrrfqsirdfinrlcerrgrceromiasbcpllgi\
    esaapaetnAetAtirreutrslvtoiinaatrirncgcdnfrrurefmgrlrallmlaastcimptvmncnsnfnpucmEasdfpirrctfirts\
    trrarreuimgurairrakrdibaduhltsorvhgirauinrraflirorqrburmiuuuprudrEasoitrrtiwmtorhyrmdeglnprrlspd\
    letbfdrauuafrrtiaranEdemnprscg123Edehlmnpsrrwigkrdtrrtcnasrdetabcfaidadempsterycrxhrrurcerrlasar\
    lorrcofroauipornrrolirlnrrsgeknprstsbelbtruforrbpgrbgefarprprrrrrpsoflirrrclreduyryfrylurttayrfr\
    jgtvcvarnyggdseuoeetteoicilelkenrnootsarevoaroeoqlABLRTaotocverynllltneliavictckcezoDEgtcvriigrs\
    ndyccyaitdaoiACDFRTUVarEFGLSTtoLRlrrouistoiteierouolqxrueereiquiedgtcavrarCsdeBPiMceeuorttoirtdh\
    DcctoictalreeTreNEyoieakSelotoyvcavrrnnrwuerwrlgdhhaiTscetctoWtvcegvshargnlestptaniogpdntcepseet\
    goutioeaiudptqtrpeeokk244kuoiLRlrDUduLRlrHLRhlroLRlrDUduiliLRlrHLRhlrmeaiebheEetnrauotnsoicsltek\
    elnicsnafldnosrseetrrcrrauorryeeednttetvrcogrsathlrosmndnroaqilqladharootfrrgrtteocotvotory1nssl\
    vrlmalsvatrttcniligigggslvt123457lntavclcoelpqmeelrtaeproqeitslccwctioaarhlrasoletclvntiagrelphd\
    rnoagrarndsEdsvdychcyaierirtpaddlobfhlpstisrkcesoilohsahlrtlcoeadegshodukrrriospqmgrklmrarumsanl\
    rrriuegoorteereaefshttetemhuosiosuloipthssatdsrrpoighrhrtiamsqsmrrrrrtqssminiastiucrrhiuredruEes\
    cEesdarpsrsfrrrrmrhratchalgrvrrroerarupsrroosderlilnoieaehckabcdemsttdeacensepialstmesmeitrirtcp\
    deloabcfhlpstwiorkcesoilhoipshodutnrrsdgrkrumglruoeeeflhtooeicpilmberhrainwpctaoqEEelarlhaescaep\
    pbprrmlrfisoduEelaeiuacensosdsauEeleiurhrageoieeakspinesoiomenoilbizyotetyvcrarhvlrkroirnrwrshla\
    rogitdfrgvhrpaohirhiuhrhaqiaibppinnzcaertcirrrrtumrruuigtctoraeeeFneldsuqeaynlnlrewCeutudeparnin\
    rtuerreierkenenSVoTisedledeleyrokoqeenersieyleacnlnreolierperiqureliateieiLRkmnPenlidnaenpueuiem\
    fssevgubcplreeceouhesaraaiadcrelnlsACDFTUVaIteyyenlDLRUCetehstnlfSpEFTekececeBPPoniAonLRoelrchhe\
    enieeeydodvhrrxeeiopriedbsyueprpolicailedwlstimexnumerstqedcpptnlsyrmqeidiuetneotdrrrcpptrevwnai\
    yrhoneeytnmexnprdnuueroarnpklaernnetetsv34loconstDrteneggli234568354585688edeatsrrsprtlqsmnptyis\
    pnrrteirhklneetniaettlecrotoveyvlnletnaefskplilleklnlrahraeihatspoqtitrlndttreairsetrgtndorkesrs\
    rhansorartrtbdsssmarthheoaenldkovrtlarleEdvvllneecwteetqbpeeeenohrhiririkorecdesosofpheslmtdlntf\
    kvciouniwipuqaesismliuolperneletepfskplillneklnlarnatrlahlrstgtsetiorestaenlmikornnympfvturspryr\
    sssesesefnefgtolurtmbppuqaesituoourlutmbpkortnlc4fsvaspmbdtrregtnumikaeectenponpornpeltsptioogbp\
    eirprEeEearqphsepseeenfruaellstaDDMPTiuerurhtdeaCDLRUVrefgertmenibnSVrrtnwuasaebegriuwogeiDTVcrg\
    ulesalrfgfgeiStlvGLekagCbmasaptstcehascedtnrrarlnrettenreolerpermaloeipiISUEdaeopaquiDiaralwAlrw\
    aeinaidmpabreqnnsimgrevnctumuraugoqrvuseuumvdaadnriqmxtlrpamqeernwrqvdaoousabrwroerrenntDsangnno\
    otrelseruoofgnrirahdtysmdurarrfgrnoptgqrmeaofpgrseetareedlueuariaxlowsariaoabcabcltqampeetqtgnee\
    wsnfeaekohirmonprpqimanrntqysmadurerraeiqhdasnrrnwuiasresueehttsrenprpqimbtlbrtsenwoypiakluseude\
    waonreeiphpmsstagrnslDooilisrnIcCdinlooeoipeovthAoarlrtmetEFGLSTStnarlcltlolbnohAVaoeetohalasndr\
    ththfgpruerekralelttDETEGLSTeertreereilceDuesiEUgriuwoeiDTVcrprawfgArnunqsttracullorraruBDrirrfg\
    lnteabcdefghdqtgimeeksepnsezuissbporrRSacdtteeppsedrtsntsraonpwrstgllttdttlxoseqiwwtheteslkvropt\
    hetrrtgrcxtshorrqoepdprgrstnrgnteriaeelslrrtrlpqmrefivltrrfguroctitsdrtlitttqerlpqmqermpmresmlrr\
    roorlaitaeeanchiittnumeltntlctntwfngADrweRTVtrwlydiiarrqurelipaHlyterewilTVrtrenwecowtlEtteoARta\
    rtthafsMTVesiupenTseoqrqreliddsTetesEFTcyeknspESTolqplolbnoAVaoeetolrynthrctbpiuESTEecealdtcesao\
    rborthBLSTShleqsgeaatkrsiansrugouterwaoteiioxssqtatwoateortharttwqwfaohrtohtlrdrqqekoyrosopthiet\
    hamteeepqqoyrqqerdlqreirnwonottgtsfuseCytoaitntghrotBUieeTVrlSeualyfulesalaluIiCTfBBRneeeAVrcgnV\
    traGqeEwriAriaAtceheasneVtirwuiuesalGLeerSEdequiaDQetlqlineuEewilTVrrenwecowioeAAtrleseoaqliqelE\
    eeknrworwoAtaieipSolnrnotrstecewiiwrorsoatsratorahstxrerioalrntnwtowtoaqqlrxeonwoahtgeseliqqphqx\
    eoqooeifgolrsngnnlifssoDQeclaoAARTLRtrwiapgeceeoSmmllSalasndcLmooiraigBecreotlVeoBrrurqrgrrgrrAe\
    dirtLgnelEFGLSTnaaaasndresEiuqstulllouthaualamiqBBLneeercgnVtrewdrrAoerernlualuqetnwiwrArnplapne\
    gegwchcclrtmernsnlsrranrraqirgreigawawleiqxstoraaatelnsiqxxwfgthweieeeoenougkADGTlurrieeiAToncrA\
    hVtecwqaESmlEtteeipnmmargrVtrcwoeecrareauohrohrrricnyeeStrdqureliHlnltteesESlabpuESTEaldBuoenand\
    leluraegBecotlVeoBsrrrwstsandauthAurreadcaduellreiedolreeoriduorrumohrfglrrlfganrrrriqeuinthatfg\
    qqlrnrtuorwcoriDrrrgefgrewAarteoVtulqaLqeEnmechaeootrBEctBroalawtowtoorukSTrspteulesalugeEasqlen\
    seaqliqlEeabtselteniiarfrVtwoeecraooreEeltelaermorreecopeeifgsgweiqwolopwopiewtotherrethiduoprrm\
    lsletrathqqeieobtaiutualIoohthrerlrVcreoaluleurqeasktccrwoaqtoawtlAwawwomSphGsaialasndmlrqtLuamg\
    erlualuqrleiEtblctaeorBEctBrwwocqtElsrwoaewdlrfgthesfgwwswogsawtooletlopwoooeoqerrtfgnulelstbvdn\
    wwtARtorBoetBcrrSalsaueAktBrruorrerrwSpaircclEttepeueeaneltsandauesqrikAccraqtoawtuEqiowtnoeitht\
    thnsoarwwqewsowwsnqorthtreeeleetAriAwoawcoatBeqrSslatreoaarrrrpacneeaqeEBEarsltneEeltelaQuiberkt\
    BruorriaquswowfgttnrrqnnswotiIQCeerrgrwrtrroaueqlrtrrlooaceSalurqaqlGsEtBEqtEluaurtreoaaroluarnt\
    hsroswanuoAgrohrorrauowwceptBaururqaquEqolmiotrrlnaltowltoncrowtorraweaealaaeuruaqutuwlwDettuawA\
    wercrrllaaaluaemgeotlreetllalruerelarorlIwntegral\
";

pub(super) static REPLACEMENTS: [&str; 1511] = [
    "\u{2145}", "\u{3e}", "\u{22d9}", "\u{226b}", "\u{2111}", "\u{3c}", "\u{22d8}", "\u{226a}",
    "\u{39c}", "\u{39d}", "\u{2a54}", "\u{3a0}", "\u{2abb}", "\u{211c}", "\u{2abc}", "\u{39e}",
    "\u{223e}", "\u{2061}", "\u{2248}", "\u{2146}", "\u{2147}", "\u{2a9a}", "\u{2a99}", "\u{2267}",
    "\u{2265}", "\u{2277}", "\u{2063}", "\u{2148}", "\u{2208}", "\u{2062}", "\u{2266}", "\u{2264}",
    "\u{2276}", "\u{2213}", "\u{3bc}", "\u{2260}", "\u{220b}", "\u{3bd}", "\u{24c8}", "\u{2228}",
    "\u{3c0}", "\u{b1}", "\u{227a}", "\u{211e}", "\u{227b}", "\u{2118}", "\u{2240}", "\u{3be}",
    "\u{26}", "\u{410}", "\u{1d504}", "\u{2a53}", "\u{411}", "\u{1d505}", "\u{22d2}", "\u{212d}",
    "\u{3a7}", "\u{22d3}", "\u{414}", "\u{2207}", "\u{1d507}", "\u{a8}", "\u{14a}", "\u{d0}",
    "\u{42d}", "\u{1d508}", "\u{397}", "\u{424}", "\u{1d509}", "\u{413}", "\u{1d50a}", "\u{5e}",
    "\u{210c}", "\u{418}", "\u{222c}", "\u{419}", "\u{1d50d}", "\u{41a}", "\u{1d50e}", "\u{41b}",
    "\u{1d50f}", "\u{21b0}", "\u{2905}", "\u{41c}", "\u{1d510}", "\u{41d}", "\u{1d511}", "\u{2aec}",
    "\u{41e}", "\u{1d512}", "\u{41f}", "\u{1d513}", "\u{3a6}", "\u{3a8}", "\u{1d514}", "\u{ae}",
    "\u{420}", "\u{3a1}", "\u{21b1}", "\u{421}", "\u{1d516}", "\u{22d0}", "\u{2211}", "\u{22d1}",
    "\u{9}", "\u{3a4}", "\u{422}", "\u{1d517}", "\u{423}", "\u{1d518}", "\u{412}", "\u{22c1}",
    "\u{1d519}", "\u{1d51a}", "\u{1d51b}", "\u{42b}", "\u{1d51c}", "\u{417}", "\u{2128}",
    "\u{223e}\u{333}", "\u{223f}", "\u{430}", "\u{1d51e}", "\u{2227}", "\u{2220}", "\u{2a70}",
    "\u{224a}", "\u{2a}", "\u{431}", "\u{1d51f}", "\u{3d}\u{20e5}", "\u{22a5}", "\u{2229}",
    "\u{1d520}", "\u{3c7}", "\u{25cb}", "\u{222a}", "\u{434}", "\u{b0}", "\u{1d521}", "\u{f7}",
    "\u{2d9}", "\u{44d}", "\u{1d522}", "\u{2a96}", "\u{2113}", "\u{2a95}", "\u{14b}", "\u{3b7}",
    "\u{f0}", "\u{444}", "\u{1d523}", "\u{2a8c}", "\u{2a86}", "\u{433}", "\u{22db}", "\u{2a7e}",
    "\u{1d524}", "\u{2a92}", "\u{2aa5}", "\u{2aa4}", "\u{2269}", "\u{2a88}", "\u{1d525}", "\u{438}",
    "\u{21d4}", "\u{1d526}", "\u{222b}", "\u{439}", "\u{1d527}", "\u{43a}", "\u{1d528}", "\u{2a8b}",
    "\u{2a85}", "\u{2aab}", "\u{43b}", "\u{22da}", "\u{2a7d}", "\u{1d529}", "\u{2a91}", "\u{2268}",
    "\u{2a87}", "\u{25ca}", "\u{200e}", "\u{21a6}", "\u{43c}", "\u{1d52a}", "\u{2127}", "\u{2223}",
    "\u{22d9}\u{338}", "\u{226b}\u{20d2}", "\u{22d8}\u{338}", "\u{226a}\u{20d2}", "\u{2249}",
    "\u{43d}", "\u{1d52b}", "\u{2267}\u{338}", "\u{2271}", "\u{226f}", "\u{22fc}",
    "\u{2266}\u{338}", "\u{2270}", "\u{226e}", "\u{ac}", "\u{2280}", "\u{2281}", "\u{23}",
    "\u{43e}", "\u{1d52c}", "\u{29c1}", "\u{3a9}", "\u{29c0}", "\u{2a5d}", "\u{2a5b}", "\u{2225}",
    "\u{43f}", "\u{1d52d}", "\u{3c6}", "\u{3d6}", "\u{2ab3}", "\u{2aaf}", "\u{3c8}", "\u{1d52e}",
    "\u{440}", "\u{1d52f}", "\u{3c1}", "\u{200f}", "\u{2ab4}", "\u{2ab0}", "\u{441}", "\u{1d530}",
    "\u{ad}", "\u{223c}", "\u{2aaa}", "\u{2f}", "\u{25a1}", "\u{2282}", "\u{2283}", "\u{3c4}",
    "\u{442}", "\u{1d531}", "\u{22a4}", "\u{443}", "\u{1d532}", "\u{432}", "\u{1d533}", "\u{1d534}",
    "\u{1d535}", "\u{44b}", "\u{a5}", "\u{1d536}", "\u{437}", "\u{1d537}", "\u{200d}", "\u{1d538}",
    "\u{1d49c}", "\u{c4}", "\u{2ae7}", "\u{392}", "\u{1d539}", "\u{212c}", "\u{427}", "\u{a9}",
    "\u{10a}", "\u{2102}", "\u{1d49e}", "\u{402}", "\u{405}", "\u{40f}", "\u{21a1}", "\u{1d53b}",
    "\u{1d49f}", "\u{116}", "\u{1d53c}", "\u{2130}", "\u{2a73}", "\u{cb}", "\u{1d53d}", "\u{2131}",
    "\u{403}", "\u{120}", "\u{1d53e}", "\u{1d4a2}", "\u{210d}", "\u{210b}", "\u{415}", "\u{401}",
    "\u{130}", "\u{1d540}", "\u{399}", "\u{2110}", "\u{cf}", "\u{1d541}", "\u{1d4a5}", "\u{425}",
    "\u{40c}", "\u{1d542}", "\u{1d4a6}", "\u{409}", "\u{27ea}", "\u{219e}", "\u{1d543}", "\u{2112}",
    "\u{1d544}", "\u{2133}", "\u{40a}", "\u{2115}", "\u{1d4a9}", "\u{1d546}", "\u{1d4aa}", "\u{d6}",
    "\u{2119}", "\u{1d4ab}", "\u{22}", "\u{211a}", "\u{1d4ac}", "\u{27eb}", "\u{21a0}", "\u{211d}",
    "\u{211b}", "\u{428}", "\u{1d54a}", "\u{221a}", "\u{1d4ae}", "\u{22c6}", "\u{426}", "\u{1d54b}",
    "\u{1d4af}", "\u{219f}", "\u{1d54c}", "\u{3d2}", "\u{1d4b0}", "\u{dc}", "\u{2aeb}", "\u{2016}",
    "\u{1d54d}", "\u{1d4b1}", "\u{1d54e}", "\u{1d4b2}", "\u{1d54f}", "\u{1d4b3}", "\u{42f}",
    "\u{407}", "\u{42e}", "\u{1d550}", "\u{1d4b4}", "\u{178}", "\u{416}", "\u{17b}", "\u{396}",
    "\u{2124}", "\u{1d4b5}", "\u{2a5c}", "\u{2a5a}", "\u{29a4}", "\u{1d552}", "\u{224b}", "\u{27}",
    "\u{1d4b6}", "\u{e4}", "\u{2aed}", "\u{23b5}", "\u{3b2}", "\u{2136}", "\u{2310}", "\u{1d553}",
    "\u{2550}", "\u{2551}", "\u{2500}", "\u{2502}", "\u{1d4b7}", "\u{223d}", "\u{5c}", "\u{2022}",
    "\u{224e}", "\u{2229}\u{fe00}", "\u{10b}", "\u{a2}", "\u{447}", "\u{29c3}", "\u{2c6}",
    "\u{2257}", "\u{2201}", "\u{2245}", "\u{1d554}", "\u{1d4b8}", "\u{2acf}", "\u{2ad0}",
    "\u{222a}\u{fe00}", "\u{21d3}", "\u{2965}", "\u{2193}", "\u{2010}", "\u{22c4}", "\u{452}",
    "\u{1d555}", "\u{1d4b9}", "\u{455}", "\u{29f6}", "\u{25bf}", "\u{45f}", "\u{2251}", "\u{2256}",
    "\u{117}", "\u{2003}", "\u{2002}", "\u{1d556}", "\u{22d5}", "\u{3b5}", "\u{212f}", "\u{2242}",
    "\u{eb}", "\u{20ac}", "\u{21}", "\u{266d}", "\u{192}", "\u{1d557}", "\u{22d4}", "\u{1d4bb}",
    "\u{121}", "\u{22db}\u{fe00}", "\u{453}", "\u{2a8a}", "\u{1d558}", "\u{210a}", "\u{2273}",
    "\u{2aa7}", "\u{2269}\u{fe00}", "\u{bd}", "\u{2194}", "\u{210f}", "\u{1d559}", "\u{1d4bd}",
    "\u{435}", "\u{22b7}", "\u{451}", "\u{1d55a}", "\u{3b9}", "\u{1d4be}", "\u{ef}", "\u{1d55b}",
    "\u{1d4bf}", "\u{445}", "\u{45c}", "\u{1d55c}", "\u{1d4c0}", "\u{21d0}", "\u{2962}", "\u{27e8}",
    "\u{2190}", "\u{2aad}", "\u{7b}", "\u{2936}", "\u{21b2}", "\u{22da}\u{fe00}", "\u{459}",
    "\u{2a89}", "\u{1d55d}", "\u{29eb}", "\u{28}", "\u{1d4c1}", "\u{2272}", "\u{5b}", "\u{2aa6}",
    "\u{25c3}", "\u{2268}\u{fe00}", "\u{af}", "\u{2642}", "\u{2720}", "\u{2adb}", "\u{2026}",
    "\u{1d55e}", "\u{1d4c2}", "\u{226b}\u{338}", "\u{226a}\u{338}", "\u{2220}\u{20d2}",
    "\u{2a70}\u{338}", "\u{a0}", "\u{2a43}", "\u{2a42}", "\u{2a7e}\u{338}", "\u{22fa}", "\u{45a}",
    "\u{2025}", "\u{2a7d}\u{338}", "\u{2224}", "\u{1d55f}", "\u{2226}", "\u{2aaf}\u{338}",
    "\u{2ab0}\u{338}", "\u{1d4c3}", "\u{2241}", "\u{2284}", "\u{2285}", "\u{2279}", "\u{2278}",
    "\u{224d}\u{20d2}", "\u{2265}\u{20d2}", "\u{3e}\u{20d2}", "\u{2264}\u{20d2}", "\u{3c}\u{20d2}",
    "\u{229b}", "\u{229a}", "\u{2a38}", "\u{2299}", "\u{2db}", "\u{222e}", "\u{29b6}", "\u{1d560}",
    "\u{29b7}", "\u{aa}", "\u{ba}", "\u{2a56}", "\u{2134}", "\u{2298}", "\u{f6}", "\u{b6}",
    "\u{2202}", "\u{3d5}", "\u{2b}", "\u{1d561}", "\u{2ab7}", "\u{2ab5}", "\u{220f}", "\u{221d}",
    "\u{1d4c5}", "\u{2a0c}", "\u{1d562}", "\u{1d4c6}", "\u{21d2}", "\u{2964}", "\u{223d}\u{331}",
    "\u{27e9}", "\u{2192}", "\u{7d}", "\u{2937}", "\u{21b3}", "\u{25ad}", "\u{3f1}", "\u{2da}",
    "\u{1d563}", "\u{29}", "\u{1d4c7}", "\u{5d}", "\u{25b9}", "\u{2ab8}", "\u{2ab6}", "\u{22c5}",
    "\u{a7}", "\u{3b}", "\u{2736}", "\u{448}", "\u{2243}", "\u{2a9e}", "\u{2a9d}", "\u{2aac}",
    "\u{29c4}", "\u{1d564}", "\u{25aa}", "\u{1d4c8}", "\u{2606}", "\u{2ac5}", "\u{2286}",
    "\u{266a}", "\u{b9}", "\u{b2}", "\u{b3}", "\u{2ac6}", "\u{2287}", "\u{23b4}", "\u{20db}",
    "\u{222d}", "\u{2928}", "\u{1d565}", "\u{2929}", "\u{225c}", "\u{1d4c9}", "\u{446}", "\u{21d1}",
    "\u{2963}", "\u{2191}", "\u{1d566}", "\u{3c5}", "\u{1d4ca}", "\u{25b5}", "\u{fc}", "\u{21d5}",
    "\u{2ae8}", "\u{2195}", "\u{7c}", "\u{1d567}", "\u{1d4cb}", "\u{1d568}", "\u{1d4cc}",
    "\u{22c2}", "\u{22c3}", "\u{27fc}", "\u{22fb}", "\u{1d569}", "\u{1d4cd}", "\u{44f}", "\u{457}",
    "\u{1d56a}", "\u{1d4ce}", "\u{44e}", "\u{ff}", "\u{17c}", "\u{3b6}", "\u{436}", "\u{1d56b}",
    "\u{1d4cf}", "\u{200c}", "\u{c6}", "\u{c2}", "\u{391}", "\u{100}", "\u{104}", "\u{c5}",
    "\u{2d8}", "\u{108}", "\u{2237}", "\u{2a2f}", "\u{2ae4}", "\u{394}", "\u{ca}", "\u{112}",
    "\u{118}", "\u{2a75}", "\u{393}", "\u{11c}", "\u{2c7}", "\u{124}", "\u{132}", "\u{ce}",
    "\u{12a}", "\u{12e}", "\u{406}", "\u{134}", "\u{404}", "\u{39a}", "\u{152}", "\u{d4}",
    "\u{14c}", "\u{2033}", "\u{2910}", "\u{15c}", "\u{3a3}", "\u{de}", "\u{2122}", "\u{40b}",
    "\u{398}", "\u{40e}", "\u{db}", "\u{16a}", "\u{172}", "\u{16e}", "\u{22ab}", "\u{22a9}",
    "\u{174}", "\u{22c0}", "\u{176}", "\u{e2}", "\u{b4}", "\u{e6}", "\u{2135}", "\u{3b1}",
    "\u{101}", "\u{2a3f}", "\u{221f}", "\u{105}", "\u{e5}", "\u{2a11}", "\u{224c}", "\u{201e}",
    "\u{3f6}", "\u{2423}", "\u{2592}", "\u{2591}", "\u{2593}", "\u{2588}", "\u{2557}", "\u{2554}",
    "\u{2556}", "\u{2553}", "\u{2566}", "\u{2569}", "\u{2564}", "\u{2567}", "\u{255d}", "\u{255a}",
    "\u{255c}", "\u{2559}", "\u{256c}", "\u{2563}", "\u{2560}", "\u{256b}", "\u{2562}", "\u{255f}",
    "\u{2555}", "\u{2552}", "\u{2510}", "\u{250c}", "\u{2565}", "\u{2568}", "\u{252c}", "\u{2534}",
    "\u{255b}", "\u{2558}", "\u{2518}", "\u{2514}", "\u{256a}", "\u{2561}", "\u{255e}", "\u{253c}",
    "\u{2524}", "\u{251c}", "\u{204f}", "\u{22cd}", "\u{29c5}", "\u{2aae}", "\u{224f}", "\u{2041}",
    "\u{2a4d}", "\u{109}", "\u{2a4c}", "\u{b8}", "\u{2713}", "\u{2663}", "\u{3a}", "\u{2c}",
    "\u{21b5}", "\u{2717}", "\u{2ad1}", "\u{2ad2}", "\u{22ef}", "\u{22de}", "\u{22df}", "\u{2a45}",
    "\u{22ce}", "\u{22cf}", "\u{2231}", "\u{22a3}", "\u{2dd}", "\u{21ca}", "\u{3b4}", "\u{21c3}",
    "\u{21c2}", "\u{2666}", "\u{22f2}", "\u{2250}", "\u{22f1}", "\u{25be}", "\u{21f5}", "\u{296f}",
    "\u{2a77}", "\u{ea}", "\u{2252}", "\u{113}", "\u{2205}", "\u{119}", "\u{2a71}", "\u{3f5}",
    "\u{2261}", "\u{2253}", "\u{2971}", "\u{2203}", "\u{fb00}", "\u{fb01}", "\u{66}\u{6a}",
    "\u{fb02}", "\u{25b1}", "\u{2ad9}", "\u{2044}", "\u{2322}", "\u{3b3}", "\u{11d}", "\u{2aa9}",
    "\u{2137}", "\u{22e7}", "\u{60}", "\u{2a8e}", "\u{2a90}", "\u{2a7a}", "\u{22d7}", "\u{21ad}",
    "\u{125}", "\u{21ff}", "\u{ee}", "\u{a1}", "\u{2129}", "\u{133}", "\u{12b}", "\u{131}",
    "\u{1b5}", "\u{221e}", "\u{12f}", "\u{2a3c}", "\u{22f9}", "\u{22f4}", "\u{456}", "\u{135}",
    "\u{237}", "\u{454}", "\u{3ba}", "\u{21da}", "\u{290e}", "\u{2991}", "\u{ab}", "\u{21e4}",
    "\u{2aad}\u{fe00}", "\u{290c}", "\u{2772}", "\u{298b}", "\u{2308}", "\u{201c}", "\u{2aa8}",
    "\u{21bd}", "\u{21bc}", "\u{2584}", "\u{21c7}", "\u{25fa}", "\u{22e6}", "\u{27ec}", "\u{21fd}",
    "\u{27e6}", "\u{2985}", "\u{21c6}", "\u{21cb}", "\u{22bf}", "\u{2a8d}", "\u{2a8f}", "\u{2018}",
    "\u{2a79}", "\u{22d6}", "\u{22b4}", "\u{25c2}", "\u{223a}", "\u{2014}", "\u{b5}", "\u{2212}",
    "\u{22b8}", "\u{224b}\u{338}", "\u{149}", "\u{266e}", "\u{224e}\u{338}", "\u{2247}", "\u{2013}",
    "\u{21d7}", "\u{2197}", "\u{2250}\u{338}", "\u{2242}\u{338}", "\u{2275}", "\u{21ce}",
    "\u{21ae}", "\u{2af2}", "\u{21cd}", "\u{219a}", "\u{2274}", "\u{22ea}", "\u{2209}", "\u{220c}",
    "\u{2202}\u{338}", "\u{21cf}", "\u{219b}", "\u{22eb}", "\u{2244}", "\u{2ac5}\u{338}",
    "\u{2288}", "\u{2ac6}\u{338}", "\u{2289}", "\u{2007}", "\u{223c}\u{20d2}", "\u{21d6}",
    "\u{2196}", "\u{f4}", "\u{229d}", "\u{153}", "\u{29bf}", "\u{29b5}", "\u{21ba}", "\u{29be}",
    "\u{203e}", "\u{14d}", "\u{3c9}", "\u{29b9}", "\u{2295}", "\u{21bb}", "\u{233d}", "\u{2afd}",
    "\u{260e}", "\u{229e}", "\u{2a72}", "\u{a3}", "\u{227c}", "\u{2032}", "\u{2ab9}", "\u{227e}",
    "\u{3f}", "\u{21db}", "\u{290f}", "\u{2992}", "\u{29a5}", "\u{bb}", "\u{21e5}", "\u{2933}",
    "\u{219d}", "\u{2236}", "\u{290d}", "\u{2773}", "\u{298c}", "\u{2309}", "\u{201d}", "\u{21c1}",
    "\u{21c0}", "\u{21c4}", "\u{21cc}", "\u{2aee}", "\u{27ed}", "\u{21fe}", "\u{27e7}", "\u{2986}",
    "\u{21c9}", "\u{2019}", "\u{22b5}", "\u{25b8}", "\u{201a}", "\u{227d}", "\u{15d}", "\u{2aba}",
    "\u{227f}", "\u{22a1}", "\u{2a66}", "\u{21d8}", "\u{2198}", "\u{2216}", "\u{266f}", "\u{3c3}",
    "\u{2aa0}", "\u{2a9f}", "\u{2246}", "\u{2323}", "\u{2aac}\u{fe00}", "\u{2293}", "\u{2294}",
    "\u{228f}", "\u{2290}", "\u{2605}", "\u{2acb}", "\u{228a}", "\u{2acc}", "\u{228b}", "\u{21d9}",
    "\u{2199}", "\u{df}", "\u{3b8}", "\u{fe}", "\u{2dc}", "\u{d7}", "\u{29cd}", "\u{45b}",
    "\u{226c}", "\u{45e}", "\u{fb}", "\u{21c5}", "\u{296e}", "\u{21bf}", "\u{21be}", "\u{2580}",
    "\u{25f8}", "\u{16b}", "\u{173}", "\u{228e}", "\u{16f}", "\u{25f9}", "\u{22f0}", "\u{25b4}",
    "\u{21c8}", "\u{2ae9}", "\u{22a8}", "\u{22a2}", "\u{225a}", "\u{22b2}", "\u{2282}\u{20d2}",
    "\u{2283}\u{20d2}", "\u{22b3}", "\u{175}", "\u{25ef}", "\u{25bd}", "\u{27fa}", "\u{27f7}",
    "\u{27f8}", "\u{27f5}", "\u{2a00}", "\u{27f9}", "\u{27f6}", "\u{25b3}", "\u{177}", "\u{c1}",
    "\u{102}", "\u{c0}", "\u{2254}", "\u{c3}", "\u{2306}", "\u{106}", "\u{10c}", "\u{c7}",
    "\u{2a74}", "\u{222f}", "\u{224d}", "\u{2021}", "\u{10e}", "\u{20dc}", "\u{110}", "\u{c9}",
    "\u{11a}", "\u{c8}", "\u{2200}", "\u{3dc}", "\u{11e}", "\u{122}", "\u{42a}", "\u{126}",
    "\u{cd}", "\u{cc}", "\u{128}", "\u{408}", "\u{136}", "\u{139}", "\u{39b}", "\u{13d}", "\u{13b}",
    "\u{13f}", "\u{141}", "\u{143}", "\u{147}", "\u{145}", "\u{d1}", "\u{d3}", "\u{150}", "\u{d2}",
    "\u{d8}", "\u{d5}", "\u{2a37}", "\u{154}", "\u{2916}", "\u{158}", "\u{156}", "\u{429}",
    "\u{42c}", "\u{15a}", "\u{160}", "\u{15e}", "\u{164}", "\u{162}", "\u{166}", "\u{da}",
    "\u{16c}", "\u{170}", "\u{d9}", "\u{168}", "\u{2ae6}", "\u{22aa}", "\u{dd}", "\u{179}",
    "\u{17d}", "\u{e1}", "\u{103}", "\u{e0}", "\u{2a55}", "\u{2221}", "\u{2222}", "\u{2a6f}",
    "\u{e3}", "\u{22bd}", "\u{2305}", "\u{2235}", "\u{22c8}", "\u{29c9}", "\u{2035}", "\u{a6}",
    "\u{107}", "\u{2a44}", "\u{2a4b}", "\u{2a47}", "\u{2a40}", "\u{10d}", "\u{e7}", "\u{2aef}",
    "\u{40}", "\u{2218}", "\u{2210}", "\u{2117}", "\u{21b6}", "\u{2a46}", "\u{2a4a}", "\u{228d}",
    "\u{21b7}", "\u{a4}", "\u{232d}", "\u{2020}", "\u{2138}", "\u{10f}", "\u{297f}", "\u{22c7}",
    "\u{231e}", "\u{230d}", "\u{24}", "\u{231f}", "\u{230c}", "\u{111}", "\u{e9}", "\u{2a6e}",
    "\u{11b}", "\u{2255}", "\u{e8}", "\u{2a98}", "\u{2a97}", "\u{2004}", "\u{2005}", "\u{29e3}",
    "\u{3d}", "\u{225f}", "\u{2640}", "\u{fb03}", "\u{fb04}", "\u{2153}", "\u{bc}", "\u{2155}",
    "\u{2159}", "\u{215b}", "\u{2154}", "\u{2156}", "\u{be}", "\u{2157}", "\u{215c}", "\u{2158}",
    "\u{215a}", "\u{215d}", "\u{215e}", "\u{1f5}", "\u{3dd}", "\u{11f}", "\u{2a80}", "\u{2a94}",
    "\u{2995}", "\u{2978}", "\u{200a}", "\u{44a}", "\u{2665}", "\u{22b9}", "\u{223b}", "\u{2015}",
    "\u{127}", "\u{2043}", "\u{ed}", "\u{ec}", "\u{29dc}", "\u{2105}", "\u{22ba}", "\u{bf}",
    "\u{22f3}", "\u{129}", "\u{458}", "\u{3f0}", "\u{137}", "\u{138}", "\u{291b}", "\u{13a}",
    "\u{3bb}", "\u{291d}", "\u{21a9}", "\u{21ab}", "\u{2939}", "\u{21a2}", "\u{2919}", "\u{13e}",
    "\u{13c}", "\u{2a7f}", "\u{2a93}", "\u{297c}", "\u{230a}", "\u{296a}", "\u{296b}", "\u{140}",
    "\u{23b0}", "\u{2a2d}", "\u{2217}", "\u{5f}", "\u{2993}", "\u{296d}", "\u{2039}", "\u{142}",
    "\u{22cb}", "\u{22c9}", "\u{2976}", "\u{2996}", "\u{25ae}", "\u{2a29}", "\u{2af0}", "\u{b7}",
    "\u{229f}", "\u{2238}", "\u{22a7}", "\u{22af}", "\u{22ae}", "\u{144}", "\u{224f}\u{338}",
    "\u{148}", "\u{146}", "\u{2924}", "\u{2262}", "\u{2204}", "\u{22ec}", "\u{22f9}\u{338}",
    "\u{2afd}\u{20e5}", "\u{22e0}", "\u{2933}\u{338}", "\u{219d}\u{338}", "\u{22ed}", "\u{22e1}",
    "\u{f1}", "\u{2116}", "\u{22ad}", "\u{2904}", "\u{22ac}", "\u{2902}", "\u{2903}", "\u{2923}",
    "\u{2927}", "\u{f3}", "\u{151}", "\u{29bc}", "\u{f2}", "\u{2296}", "\u{22b6}", "\u{f8}",
    "\u{f5}", "\u{2297}", "\u{2af3}", "\u{25}", "\u{2e}", "\u{2030}", "\u{2214}", "\u{2a25}",
    "\u{22e8}", "\u{22b0}", "\u{2008}", "\u{2057}", "\u{291c}", "\u{155}", "\u{2975}", "\u{291e}",
    "\u{21aa}", "\u{21ac}", "\u{2945}", "\u{21a3}", "\u{291a}", "\u{159}", "\u{157}", "\u{297d}",
    "\u{230b}", "\u{296c}", "\u{23b1}", "\u{2a2e}", "\u{2994}", "\u{203a}", "\u{22cc}", "\u{22ca}",
    "\u{15b}", "\u{161}", "\u{15f}", "\u{22e9}", "\u{2925}", "\u{449}", "\u{3c2}", "\u{2a6a}",
    "\u{2a33}", "\u{44c}", "\u{233f}", "\u{2660}", "\u{2293}\u{fe00}", "\u{2294}\u{fe00}",
    "\u{2291}", "\u{2292}", "\u{2abd}", "\u{2ac7}", "\u{2ad5}", "\u{2ad3}", "\u{2abe}", "\u{2ac8}",
    "\u{2ad4}", "\u{2ad6}", "\u{2926}", "\u{292a}", "\u{2316}", "\u{165}", "\u{163}", "\u{2315}",
    "\u{2234}", "\u{3d1}", "\u{2009}", "\u{22a0}", "\u{2a30}", "\u{2336}", "\u{2af1}", "\u{2034}",
    "\u{25ec}", "\u{167}", "\u{fa}", "\u{16d}", "\u{171}", "\u{297e}", "\u{f9}", "\u{231c}",
    "\u{230f}", "\u{231d}", "\u{230e}", "\u{169}", "\u{299c}", "\u{22bb}", "\u{22ee}",
    "\u{2acb}\u{fe00}", "\u{228a}\u{fe00}", "\u{2acc}\u{fe00}", "\u{228b}\u{fe00}", "\u{2a5f}",
    "\u{2259}", "\u{2a01}", "\u{2a02}", "\u{2a06}", "\u{2a04}", "\u{fd}", "\u{17a}", "\u{17e}",
    "\u{2230}", "\u{395}", "\u{a}", "\u{2060}", "\u{39f}", "\u{3a5}", "\u{22be}", "\u{237c}",
    "\u{29b0}", "\u{2261}\u{20e5}", "\u{2a50}", "\u{29b2}", "\u{29c2}", "\u{2a6d}", "\u{2938}",
    "\u{2935}", "\u{293d}", "\u{293c}", "\u{29b1}", "\u{29a6}", "\u{2a78}", "\u{2a82}", "\u{2a7c}",
    "\u{2948}", "\u{22f5}", "\u{291f}", "\u{2973}", "\u{298f}", "\u{298d}", "\u{2967}", "\u{2a81}",
    "\u{2a34}", "\u{2a7b}", "\u{2966}", "\u{2a2a}", "\u{22f7}", "\u{22f6}", "\u{22fe}", "\u{22fd}",
    "\u{2a14}", "\u{22e2}", "\u{22e3}", "\u{29de}", "\u{22b4}\u{20d2}", "\u{22b5}\u{20d2}",
    "\u{29bb}", "\u{3bf}", "\u{2a57}", "\u{2031}", "\u{210e}", "\u{2a22}", "\u{2a26}", "\u{2a27}",
    "\u{2a16}", "\u{2920}", "\u{2974}", "\u{298e}", "\u{2990}", "\u{2969}", "\u{2a35}", "\u{2968}",
    "\u{2a24}", "\u{2972}", "\u{2ac3}", "\u{2ac1}", "\u{2abf}", "\u{2979}", "\u{2ad8}", "\u{2ac4}",
    "\u{27c9}", "\u{2ad7}", "\u{297b}", "\u{2ac2}", "\u{2ac0}", "\u{2ada}", "\u{2a39}", "\u{2a3b}",
    "\u{29a7}", "\u{299a}", "\u{21dd}", "\u{2911}", "\u{2aa1}", "\u{2949}", "\u{2a58}", "\u{29a8}",
    "\u{29a9}", "\u{29aa}", "\u{29ab}", "\u{29ac}", "\u{29ad}", "\u{29ae}", "\u{29af}", "\u{299d}",
    "\u{2233}", "\u{23b6}", "\u{27c8}", "\u{2a49}", "\u{2a10}", "\u{2a48}", "\u{2232}", "\u{27ff}",
    "\u{23e7}", "\u{29e5}", "\u{2a0d}", "\u{2a84}", "\u{29dd}", "\u{2a17}", "\u{29b4}", "\u{294b}",
    "\u{2a83}", "\u{294a}", "\u{21a5}", "\u{2a6d}\u{338}", "\u{22f5}\u{338}", "\u{2a36}",
    "\u{2a23}", "\u{2a15}", "\u{232e}", "\u{2312}", "\u{2313}", "\u{29b3}", "\u{2a12}", "\u{29ce}",
    "\u{2a13}", "\u{29e4}", "\u{2a31}", "\u{2a3a}", "\u{23e2}", "\u{311}", "\u{226d}", "\u{23de}",
    "\u{205f}\u{200a}", "\u{23df}", "\u{2912}", "\u{21a7}", "\u{21a4}", "\u{205f}", "\u{29f4}",
    "\u{2913}", "\u{2970}", "\u{295a}", "\u{2952}", "\u{2aa2}", "\u{295b}", "\u{2953}", "\u{200b}",
    "\u{294e}", "\u{29cf}", "\u{2960}", "\u{2958}", "\u{228f}\u{338}", "\u{23dc}", "\u{25fb}",
    "\u{2951}", "\u{227f}\u{338}", "\u{29d0}", "\u{295c}", "\u{2954}", "\u{23dd}", "\u{295e}",
    "\u{2956}", "\u{25fc}", "\u{2961}", "\u{2959}", "\u{2aa1}\u{338}", "\u{2290}\u{338}",
    "\u{294f}", "\u{2758}", "\u{295f}", "\u{2957}", "\u{29cf}\u{338}", "\u{295d}", "\u{2955}",
    "\u{2950}", "\u{29d0}\u{338}", "\u{25ab}", "\u{2aa2}\u{338}",
];
