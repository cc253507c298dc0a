//! Example puzzle inputs with their known answers.

/// Seed almanac: 35 / 46.
pub const SEED_ALMANAC: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

/// Pipe maze, simple square loop: farthest point 4.
pub const PIPE_MAZE_SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

/// Pipe maze, winding loop: farthest point 8.
pub const PIPE_MAZE_WINDING: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

/// Pipe maze with two enclosed pockets: 4 enclosed tiles.
pub const PIPE_MAZE_POCKETS: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

/// Pipe maze where the outside squeezes between pipes: 4 enclosed tiles.
pub const PIPE_MAZE_SQUEEZE: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

/// Larger pipe maze: 8 enclosed tiles.
pub const PIPE_MAZE_LARGE: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

/// Pipe maze full of junk pipe: 10 enclosed tiles.
pub const PIPE_MAZE_JUNK: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

/// Cosmic expansion: 374; factor 10 gives 1030, factor 100 gives 8410.
pub const COSMIC_EXPANSION: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

/// Hot springs condition records: 21 / 525152.
pub const HOT_SPRINGS: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

/// Mirror patterns: 405 / 400.
pub const POINT_OF_INCIDENCE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

/// Reflector dish: 136 / 64.
pub const PARABOLIC_DISH: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

/// Mirror contraption: 46 / 51.
pub const FLOOR_LAVA: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";
